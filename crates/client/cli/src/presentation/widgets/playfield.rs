//! Playfield widget: the framed grid with every entity drawn on it.
//!
//! Building the cell matrix is kept separate from drawing so the layering
//! rules can be checked without a terminal.

use game_core::{GameState, Grid, Position};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

/// Frame piece at a border cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

/// What a single screen cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Border(Edge),
    Obstacle,
    Collectible,
    Adversary,
    Player,
}

/// Builds the `height x width` cell matrix, indexed `[y][x]`.
///
/// Later layers overwrite earlier ones: obstacles, collectibles,
/// adversaries, then the player. Anything outside the interior is skipped.
pub fn build_cells(state: &GameState, grid: &Grid) -> Vec<Vec<Cell>> {
    let width = grid.width().max(0) as usize;
    let height = grid.height().max(0) as usize;

    let mut cells: Vec<Vec<Cell>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| border_cell(grid, Position::new(x as i32, y as i32)))
                .collect()
        })
        .collect();

    let mut paint = |position: Position, cell: Cell| {
        if grid.is_inside_interior(position) {
            cells[position.y as usize][position.x as usize] = cell;
        }
    };

    for &obstacle in &state.obstacles {
        paint(obstacle, Cell::Obstacle);
    }
    for &collectible in &state.collectibles {
        paint(collectible, Cell::Collectible);
    }
    for adversary in &state.adversaries {
        paint(adversary.position, Cell::Adversary);
    }
    paint(state.player, Cell::Player);

    cells
}

fn border_cell(grid: &Grid, position: Position) -> Cell {
    if !grid.is_border(position) {
        return Cell::Empty;
    }

    let right = grid.width() - 1;
    let bottom = grid.height() - 1;
    let edge = match (position.x, position.y) {
        (0, 0) => Edge::TopLeft,
        (x, 0) if x == right => Edge::TopRight,
        (0, y) if y == bottom => Edge::BottomLeft,
        (x, y) if x == right && y == bottom => Edge::BottomRight,
        (_, y) if y == 0 || y == bottom => Edge::Horizontal,
        _ => Edge::Vertical,
    };
    Cell::Border(edge)
}

/// Render the playfield panel.
pub fn render(frame: &mut Frame, area: Rect, cells: &[Vec<Cell>], theme: &Theme) {
    let rows: Vec<Line> = cells
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&cell| {
                    let (glyph, style) = theme.render_cell(cell);
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), area);
}
