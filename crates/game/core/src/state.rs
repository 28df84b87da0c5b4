//! Authoritative game state representation.
//!
//! [`GameState`] is a plain aggregate: the engine owns it exclusively and is
//! the only code that mutates it. Frontends read it to render.

use crate::geometry::{Direction, Position};

/// A mobile adversary and the direction it is currently travelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adversary {
    pub position: Position,
    pub facing: Direction,
}

impl Adversary {
    pub const fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }
}

/// Coarse lifecycle of a session, derived from the `won`/`over` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Adversaries move on ticks and keys drive the player.
    Playing,
    /// Level complete; ticks are suppressed until any key advances the level.
    Won,
    /// Terminal. Nothing mutates the state any more.
    Over,
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub player: Position,
    /// Items still to pick up. Order is irrelevant; duplicates are allowed.
    pub collectibles: Vec<Position>,
    /// Iterated in a stable order every tick.
    pub adversaries: Vec<Adversary>,
    /// Impassable cells, fixed for the lifetime of a level.
    pub obstacles: Vec<Position>,
    pub score: u32,
    /// 1-based level number.
    pub level: u32,
    /// Collectible count chosen at generation time.
    pub collectibles_needed: u32,
    pub over: bool,
    pub won: bool,
}

impl GameState {
    /// Creates an empty level-1 state with the player at `player`.
    ///
    /// Collections are empty; the engine populates them through level
    /// generation.
    pub fn new(player: Position) -> Self {
        Self {
            player,
            collectibles: Vec::new(),
            adversaries: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            collectibles_needed: 0,
            over: false,
            won: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::Over
        } else if self.won {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Number of collectibles picked up on the current level.
    pub fn collected(&self) -> u32 {
        self.collectibles_needed
            .saturating_sub(self.collectibles.len() as u32)
    }
}
