//! CLI-specific configuration for the terminal client.
use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use game_core::GameConfig;

/// Terminal client configuration.
///
/// Game rules live in [`GameConfig`]; everything else here is about driving
/// them from a terminal: the tick clock, the input queue, seeding and logs.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub game: GameConfig,
    /// Adversary tick period.
    pub tick_interval: Duration,
    /// Fixed RNG seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Capacity of the keystroke queue between producer and game loop.
    pub key_buffer: usize,
    /// Log directory override.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_TICK_MS: u64 = 300;
    pub const MIN_TICK_MS: u64 = 10;
    pub const DEFAULT_KEY_BUFFER: usize = 32;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `XZAP_TICK_MS` - Adversary tick period in milliseconds (default: 300)
    /// - `XZAP_SEED` - Fixed RNG seed for reproducible sessions (default: random)
    /// - `XZAP_KEY_BUFFER` - Keystroke queue capacity (default: 32)
    /// - `XZAP_WIDTH` / `XZAP_HEIGHT` - Grid size including the frame (default: 40x20)
    /// - `XZAP_LOG_DIR` - Directory for session logs (default: platform cache dir)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(&lookup, "XZAP_TICK_MS") {
            config.tick_interval = Duration::from_millis(ms.max(Self::MIN_TICK_MS));
        }

        config.seed = parse::<u64>(&lookup, "XZAP_SEED");

        if let Some(capacity) = parse::<usize>(&lookup, "XZAP_KEY_BUFFER") {
            config.key_buffer = capacity.max(1);
        }

        let width = parse::<i32>(&lookup, "XZAP_WIDTH");
        let height = parse::<i32>(&lookup, "XZAP_HEIGHT");
        if width.is_some() || height.is_some() {
            let width = width.unwrap_or(GameConfig::DEFAULT_WIDTH);
            let height = height.unwrap_or(GameConfig::DEFAULT_HEIGHT);
            config.game = GameConfig::with_dimensions(width, height)
                .context("invalid XZAP_WIDTH/XZAP_HEIGHT")?;
        }

        config.log_dir = lookup("XZAP_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_interval: Duration::from_millis(Self::DEFAULT_TICK_MS),
            seed: None,
            key_buffer: Self::DEFAULT_KEY_BUFFER,
            log_dir: None,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CliConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(300));
        assert_eq!(config.seed, None);
        assert_eq!(config.key_buffer, 32);
        assert_eq!(config.game, GameConfig::default());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("XZAP_TICK_MS", "150"),
            ("XZAP_SEED", "42"),
            ("XZAP_KEY_BUFFER", "0"),
            ("XZAP_WIDTH", "60"),
            ("XZAP_LOG_DIR", "/tmp/xzap"),
        ])
        .unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(150));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.key_buffer, 1);
        assert_eq!(config.game.width(), 60);
        assert_eq!(config.game.height(), GameConfig::DEFAULT_HEIGHT);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/xzap")));
    }

    #[test]
    fn clamps_tick_and_ignores_garbage() {
        let config = config_from(&[("XZAP_TICK_MS", "1"), ("XZAP_SEED", "abc")]).unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(10));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_grid_without_interior() {
        assert!(config_from(&[("XZAP_HEIGHT", "2")]).is_err());
    }

    #[test]
    fn rejects_oversized_grid() {
        assert!(
            config_from(&[("XZAP_WIDTH", "2000000000"), ("XZAP_HEIGHT", "2000000000")]).is_err()
        );
        assert!(config_from(&[("XZAP_WIDTH", "256")]).is_err());
    }
}
