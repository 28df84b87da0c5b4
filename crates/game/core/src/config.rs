use crate::error::ConfigError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Total grid width including the one-cell border frame.
    width: i32,
    /// Total grid height including the one-cell border frame.
    height: i32,
    /// Score awarded for each collectible picked up.
    pub pickup_reward: u32,
    /// Percent chance (0-100) that an adversary re-targets the player on a tick.
    pub chase_percent: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: i32 = 40;
    pub const DEFAULT_HEIGHT: i32 = 20;
    pub const DEFAULT_PICKUP_REWARD: u32 = 10;
    pub const DEFAULT_CHASE_PERCENT: u32 = 30;

    /// Smallest dimension that still leaves a single interior cell.
    pub const MIN_DIMENSION: i32 = 3;

    /// Largest dimension accepted; the whole grid is redrawn every frame.
    pub const MAX_DIMENSION: i32 = 255;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            pickup_reward: Self::DEFAULT_PICKUP_REWARD,
            chase_percent: Self::DEFAULT_CHASE_PERCENT,
        }
    }

    /// Builds a configuration for a custom grid size.
    ///
    /// The border ring is reserved for the frame, so both dimensions must be
    /// at least [`Self::MIN_DIMENSION`] to leave any playable interior, and
    /// at most [`Self::MAX_DIMENSION`].
    pub fn with_dimensions(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width < Self::MIN_DIMENSION || height < Self::MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge { width, height });
        }

        Ok(Self {
            width,
            height,
            ..Self::new()
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
