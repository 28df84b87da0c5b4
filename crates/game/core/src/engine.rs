//! Game engine: the single owner of [`GameState`].
//!
//! All state mutation flows through [`GameEngine`]. It enforces the phase
//! rules on top of the raw movement functions:
//!
//! - `Playing -> Won` when the last collectible is picked up.
//! - `Won -> Playing` when [`GameEngine::advance_level`] is called.
//! - `Playing -> Over` when an adversary lands on the player.
//! - `Over` is terminal; every mutating call becomes a no-op.

use crate::config::GameConfig;
use crate::geometry::{Direction, Grid};
use crate::level::LevelLayout;
use crate::movement::{self, AdversaryTick, PlayerMove};
use crate::rng::RngOracle;
use crate::state::{GameState, Phase};

pub struct GameEngine<R> {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    rng: R,
}

impl<R: RngOracle> GameEngine<R> {
    /// Starts a new session at level 1 with a freshly generated level.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let grid = Grid::new(&config);
        let mut engine = Self::from_state(config, GameState::new(grid.center()), rng);
        engine.init_level();
        engine
    }

    /// Wraps an existing state without regenerating the level.
    ///
    /// Used to resume from hand-built layouts.
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Self {
        Self {
            grid: Grid::new(&config),
            config,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Regenerates the current level's contents.
    ///
    /// Resets the player to the grid centre and replaces collectibles,
    /// adversaries and obstacles. Score and level number are untouched.
    pub fn init_level(&mut self) {
        let layout = LevelLayout::generate(self.state.level, &self.grid, &mut self.rng);

        self.state.player = self.grid.center();
        self.state.collectibles_needed = layout.plan.collectibles;
        self.state.collectibles = layout.collectibles;
        self.state.adversaries = layout.adversaries;
        self.state.obstacles = layout.obstacles;
    }

    /// Moves the player while the level is in play.
    ///
    /// Returns `None` when the phase does not accept player moves.
    pub fn move_player(&mut self, direction: Direction) -> Option<PlayerMove> {
        if self.phase() != Phase::Playing {
            return None;
        }

        Some(movement::move_player(
            &mut self.state,
            &self.grid,
            &self.config,
            direction,
        ))
    }

    /// Runs one adversary tick while the level is in play.
    ///
    /// Ticks are suppressed in the `Won` pause and after game over.
    pub fn tick(&mut self) -> Option<AdversaryTick> {
        if self.phase() != Phase::Playing {
            return None;
        }

        Some(movement::move_adversaries(
            &mut self.state,
            &self.grid,
            &self.config,
            &mut self.rng,
        ))
    }

    /// Leaves the `Won` pause: bumps the level and generates it.
    ///
    /// Returns false (and changes nothing) outside the `Won` phase.
    pub fn advance_level(&mut self) -> bool {
        if self.phase() != Phase::Won {
            return false;
        }

        self.state.level += 1;
        self.state.won = false;
        self.init_level();
        true
    }
}
