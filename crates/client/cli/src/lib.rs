//! Terminal frontend for XZAP.
//!
//! The crate owns everything around the rules: configuration, logging, the
//! keystroke producer, the tick/input event loop, and ratatui rendering.
//! Game rules live in `game-core`.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliApp, FAREWELL, summary};
pub use config::CliConfig;
pub use event::{EventLoop, SessionEnd};
pub use input::{InputHandler, KeyAction};
