//! Frame layout and panel composition.
use game_core::{GameState, Grid};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{
    theme::Theme,
    widgets::{playfield, status},
};

pub fn render_frame(frame: &mut Frame, state: &GameState, grid: &Grid, theme: &Theme) {
    let playfield_height = u16::try_from(grid.height()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(playfield_height),
            Constraint::Length(status::HEIGHT),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let cells = playfield::build_cells(state, grid);
    playfield::render(frame, chunks[0], &cells, theme);
    status::render(frame, chunks[1], state, theme);
}
