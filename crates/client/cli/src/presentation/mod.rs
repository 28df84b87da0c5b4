//! Terminal presentation components used by the CLI client.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

use anyhow::Result;
use game_core::{GameState, Grid};

use self::{terminal::Tui, theme::Theme};

/// Full-screen redraw sink driven by the event loop.
///
/// Implementations hold no game logic; they are handed the whole state
/// after every processed event.
pub trait Renderer {
    fn render(&mut self, state: &GameState, grid: &Grid) -> Result<()>;
}

/// Ratatui renderer drawing into the alternate screen.
pub struct TerminalRenderer {
    terminal: Tui,
    theme: Theme,
}

impl TerminalRenderer {
    pub fn new(terminal: Tui) -> Self {
        Self {
            terminal,
            theme: Theme,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, state: &GameState, grid: &Grid) -> Result<()> {
        let theme = &self.theme;
        self.terminal
            .draw(|frame| ui::render_frame(frame, state, grid, theme))?;
        Ok(())
    }
}
