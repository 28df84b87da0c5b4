//! Procedural level generation.
//!
//! A level's size is a pure function of its number ([`LevelPlan`]); its
//! contents are drawn uniformly from the interior ([`LevelLayout`]).
//! Positions are not deduplicated: collectibles, adversaries and obstacles may
//! share cells with each other and with the player's start.

use crate::geometry::{Direction, Grid, Position};
use crate::rng::RngOracle;
use crate::state::Adversary;

/// Entity counts for one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelPlan {
    pub collectibles: u32,
    pub adversaries: u32,
    pub obstacles: u32,
}

impl LevelPlan {
    pub const fn for_level(level: u32) -> Self {
        Self {
            collectibles: 5 + level * 2,
            adversaries: 1 + level / 2,
            obstacles: 10 + level * 3,
        }
    }
}

/// Freshly generated contents for a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    pub plan: LevelPlan,
    pub collectibles: Vec<Position>,
    pub adversaries: Vec<Adversary>,
    pub obstacles: Vec<Position>,
}

impl LevelLayout {
    /// Generates the layout for `level`.
    ///
    /// Draw order is fixed (collectibles, then adversaries with their facing,
    /// then obstacles) so a seeded generator always yields the same level.
    pub fn generate<R: RngOracle + ?Sized>(level: u32, grid: &Grid, rng: &mut R) -> Self {
        let plan = LevelPlan::for_level(level);

        let collectibles = (0..plan.collectibles)
            .map(|_| grid.random_interior(rng))
            .collect();

        let adversaries = (0..plan.adversaries)
            .map(|_| {
                let position = grid.random_interior(rng);
                Adversary::new(position, Direction::random(rng))
            })
            .collect();

        let obstacles = (0..plan.obstacles)
            .map(|_| grid.random_interior(rng))
            .collect();

        Self {
            plan,
            collectibles,
            adversaries,
            obstacles,
        }
    }
}
