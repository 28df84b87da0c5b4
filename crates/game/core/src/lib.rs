//! Deterministic game rules for XZAP.
//!
//! `game-core` defines the playfield, level generation, movement rules and the
//! phase machine, and exposes pure APIs with no I/O. All state mutation flows
//! through [`engine::GameEngine`]; frontends own the clock and the input
//! stream and call into the engine once per event.
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod level;
pub mod movement;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::ConfigError;
pub use geometry::{Direction, Grid, Position};
pub use level::{LevelLayout, LevelPlan};
pub use movement::{AdversaryTick, PlayerMove};
pub use rng::{PcgRng, RngOracle};
pub use state::{Adversary, GameState, Phase};
