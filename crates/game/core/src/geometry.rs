//! Grid coordinates, facings and the bounded playfield.
//!
//! The playfield is a `width x height` grid whose outermost ring is reserved
//! for the rendered frame. Every entity lives strictly inside that ring, in
//! the interior region `[1, width-2] x [1, height-2]`.

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::config::GameConfig;
use crate::rng::RngOracle;

/// Integer cell coordinate. `y` grows downward, matching screen rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four cardinal facings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All facings in index order, so `ALL[i]` is the facing for roll `i`.
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this facing in screen coordinates.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Draws a facing uniformly from the four directions.
    pub fn random<R: RngOracle + ?Sized>(rng: &mut R) -> Self {
        let idx = rng.range(0, Direction::COUNT as u32 - 1) as usize;
        Self::ALL[idx]
    }

    /// Facing that closes the gap from `from` toward `to`.
    ///
    /// Horizontal distance takes priority over vertical. Returns `None` when
    /// both positions coincide.
    pub fn toward(from: Position, to: Position) -> Option<Self> {
        if to.x > from.x {
            Some(Direction::Right)
        } else if to.x < from.x {
            Some(Direction::Left)
        } else if to.y > from.y {
            Some(Direction::Down)
        } else if to.y < from.y {
            Some(Direction::Up)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Bounded playfield dimensions with border semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width(),
            height: config.height(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True when `position` lies in the playable interior (not on the frame).
    pub fn is_inside_interior(&self, position: Position) -> bool {
        position.x > 0
            && position.x < self.width - 1
            && position.y > 0
            && position.y < self.height - 1
    }

    /// True when `position` is on the one-cell border ring.
    pub fn is_border(&self, position: Position) -> bool {
        let in_bounds = position.x >= 0
            && position.x < self.width
            && position.y >= 0
            && position.y < self.height;
        in_bounds && !self.is_inside_interior(position)
    }

    /// Player start cell.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Draws an interior cell uniformly at random, `x` first then `y`.
    pub fn random_interior<R: RngOracle + ?Sized>(&self, rng: &mut R) -> Position {
        let x = rng.range(1, (self.width - 2) as u32) as i32;
        let y = rng.range(1, (self.height - 2) as u32) as i32;
        Position::new(x, y)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
