//! Error types for game-core.
//!
//! The rules themselves are total: level generation, movement and level
//! transitions cannot fail over their valid inputs. The only fallible step is
//! building a [`GameConfig`](crate::GameConfig) from untrusted dimensions.

/// Rejected game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} leaves no playable interior (minimum is 3x3)")]
    GridTooSmall { width: i32, height: i32 },

    #[error("grid {width}x{height} is too large (maximum is 255x255)")]
    GridTooLarge { width: i32, height: i32 },
}
