//! Movement rules for the player and the adversaries.
//!
//! Player/adversary contact is only detected from the adversary side: the
//! player may step onto an adversary's cell, and the game ends when that
//! adversary takes its own turn.

use crate::config::GameConfig;
use crate::geometry::{Direction, Grid, Position};
use crate::rng::RngOracle;
use crate::state::GameState;

/// Result of a single player step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMove {
    /// Destination is on the frame or outside the grid; nothing changed.
    OutOfBounds { destination: Position },
    /// Destination holds an obstacle; nothing changed.
    Blocked { destination: Position },
    /// Player moved onto an empty cell.
    Moved { to: Position },
    /// Player moved and picked up one collectible.
    Collected { to: Position, remaining: usize },
}

impl PlayerMove {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Collected { .. })
    }
}

/// Summary of one adversary tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdversaryTick {
    /// Adversaries that advanced a cell.
    pub moved: usize,
    /// Adversaries that were blocked and re-rolled their facing.
    pub blocked: usize,
    /// Adversaries that re-targeted the player this tick.
    pub retargeted: usize,
    /// True when any adversary ended the tick on the player's cell.
    pub caught_player: bool,
}

/// Whether an entity may enter `position`.
pub fn is_open(state: &GameState, grid: &Grid, position: Position) -> bool {
    grid.is_inside_interior(position) && !state.is_obstacle(position)
}

/// Attempts to move the player one cell in `direction`.
///
/// On success, picks up the first collectible on the destination (if any),
/// awards the pickup reward, and sets `won` once no collectibles remain.
pub fn move_player(
    state: &mut GameState,
    grid: &Grid,
    config: &GameConfig,
    direction: Direction,
) -> PlayerMove {
    let destination = state.player.step(direction);

    if !grid.is_inside_interior(destination) {
        return PlayerMove::OutOfBounds { destination };
    }
    if state.is_obstacle(destination) {
        return PlayerMove::Blocked { destination };
    }

    state.player = destination;

    let picked = state
        .collectibles
        .iter()
        .position(|item| *item == destination);

    if let Some(idx) = picked {
        state.collectibles.remove(idx);
        state.score += config.pickup_reward;
    }

    if state.collectibles.is_empty() {
        state.won = true;
    }

    match picked {
        Some(_) => PlayerMove::Collected {
            to: destination,
            remaining: state.collectibles.len(),
        },
        None => PlayerMove::Moved { to: destination },
    }
}

/// Advances every adversary by one tick, in collection order.
///
/// Each adversary may re-target toward the player, then tries one step along
/// its facing. A blocked adversary stays put and rolls a fresh facing for the
/// next tick instead of retrying. Landing on the player sets `over`; later
/// adversaries in the same tick still take their turn.
pub fn move_adversaries<R: RngOracle + ?Sized>(
    state: &mut GameState,
    grid: &Grid,
    config: &GameConfig,
    rng: &mut R,
) -> AdversaryTick {
    let mut tick = AdversaryTick::default();
    let player = state.player;

    for idx in 0..state.adversaries.len() {
        let mut adversary = state.adversaries[idx];

        if rng.chance(config.chase_percent) {
            if let Some(facing) = Direction::toward(adversary.position, player) {
                adversary.facing = facing;
            }
            tick.retargeted += 1;
        }

        let destination = adversary.position.step(adversary.facing);
        if is_open(state, grid, destination) {
            adversary.position = destination;
            tick.moved += 1;
        } else {
            adversary.facing = Direction::random(rng);
            tick.blocked += 1;
        }

        if adversary.position == player {
            state.over = true;
            tick.caught_player = true;
        }

        state.adversaries[idx] = adversary;
    }

    tick
}
