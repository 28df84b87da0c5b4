//! Glyphs and colours for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

use crate::presentation::widgets::playfield::{Cell, Edge};

/// Consistent colour scheme for every panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn render_cell(&self, cell: Cell) -> (&'static str, Style) {
        match cell {
            Cell::Empty => (" ", Style::default()),
            Cell::Border(edge) => (edge_glyph(edge), Style::default().fg(Color::Blue)),
            Cell::Obstacle => ("█", Style::default().fg(Color::DarkGray)),
            Cell::Collectible => ("●", Style::default().fg(Color::LightMagenta)),
            Cell::Adversary => (
                "☠",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Player => (
                "◆",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn game_over(&self) -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    pub fn level_complete(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }
}

fn edge_glyph(edge: Edge) -> &'static str {
    match edge {
        Edge::TopLeft => "╔",
        Edge::TopRight => "╗",
        Edge::BottomLeft => "╚",
        Edge::BottomRight => "╝",
        Edge::Horizontal => "═",
        Edge::Vertical => "║",
    }
}
