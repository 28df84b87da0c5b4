//! Glue code tying the engine, the keystroke producer and the terminal UI together.
use anyhow::{Context, Result};
use game_core::{GameEngine, PcgRng};
use tokio::sync::mpsc;

use crate::{
    config::CliConfig,
    event::{EventLoop, SessionEnd},
    input::spawn_keystroke_producer,
    presentation::{TerminalRenderer, terminal, widgets::status::GAME_OVER_BANNER},
};

pub const FAREWELL: &str = "Thanks for playing XZAP!";

pub struct CliApp {
    config: CliConfig,
}

impl CliApp {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Runs one session and returns how it ended.
    ///
    /// The terminal is restored before this returns, on success or error.
    pub async fn run(self) -> Result<SessionEnd> {
        let config = self.config;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            seed,
            width = config.game.width(),
            height = config.game.height(),
            tick_interval = ?config.tick_interval,
            "XZAP session starting"
        );

        let engine = GameEngine::new(config.game, PcgRng::seeded(seed));

        let (tx_keys, rx_keys) = mpsc::channel(config.key_buffer);
        let event_loop = EventLoop::new(engine, rx_keys, config.tick_interval);

        let (tui, guard) = terminal::init()?;
        let mut renderer = TerminalRenderer::new(tui);

        // Detached: the thread notices the closed channel and exits on its own.
        spawn_keystroke_producer(tx_keys).context("failed to start keystroke producer")?;

        let end = event_loop.run(&mut renderer).await;

        drop(renderer);
        guard.restore().context("failed to restore terminal")?;

        tracing::info!(?end, "XZAP session finished");
        Ok(end)
    }
}

/// Text printed to the restored terminal once the session is over.
///
/// Leaving the alternate screen discards the last frame, so a game over
/// repeats its banner here.
pub fn summary(end: &SessionEnd) -> Vec<String> {
    match end {
        SessionEnd::GameOver { score, .. } => vec![
            GAME_OVER_BANNER.to_string(),
            format!("Final Score: {score}"),
            FAREWELL.to_string(),
        ],
        SessionEnd::Quit { .. } => vec![FAREWELL.to_string()],
    }
}
