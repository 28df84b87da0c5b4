//! Terminal setup/teardown helpers for the CLI UI.
use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Failure to take over the terminal at startup.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to set raw mode: {0}")]
    RawMode(#[source] io::Error),

    #[error("failed to prepare the screen: {0}")]
    Screen(#[source] io::Error),
}

/// Scoped raw-mode token.
///
/// Holding it keeps the terminal in raw mode on the alternate screen;
/// dropping it restores the user's terminal on every exit path, including
/// error propagation and panics.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Restores the terminal now instead of waiting for drop.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore();
        }
    }
}

/// Enters raw mode and the alternate screen.
pub fn init() -> Result<(Tui, TerminalGuard), TerminalError> {
    enable_raw_mode().map_err(TerminalError::RawMode)?;
    // From here on the guard owns the cleanup, even if the rest fails.
    let guard = TerminalGuard { restored: false };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Screen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(TerminalError::Screen)?;
    terminal.hide_cursor().map_err(TerminalError::Screen)?;

    Ok((terminal, guard))
}

fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}
