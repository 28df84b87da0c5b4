//! Status panel below the playfield: progress, controls and banners.

use game_core::{GameState, Phase};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

pub const CONTROLS: &str = "Controls: W=Up, S=Down, A=Left, D=Right, Q=Quit";
pub const GAME_OVER_BANNER: &str = "*** GAME OVER! You were caught by an alien! ***";
pub const LEVEL_COMPLETE_BANNER: &str = "*** LEVEL COMPLETE! Press any key for next level ***";

/// Number of rows the panel occupies.
pub const HEIGHT: u16 = 4;

/// Banner for the current phase, if any.
pub fn banner(state: &GameState) -> Option<&'static str> {
    match state.phase() {
        Phase::Playing => None,
        Phase::Won => Some(LEVEL_COMPLETE_BANNER),
        Phase::Over => Some(GAME_OVER_BANNER),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &GameState, theme: &Theme) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Level: ", theme.label()),
            Span::styled(state.level.to_string(), theme.value()),
            Span::raw(" | "),
            Span::styled("Score: ", theme.label()),
            Span::styled(state.score.to_string(), theme.value()),
            Span::raw(" | "),
            Span::styled("Berries: ", theme.label()),
            Span::styled(
                format!("{}/{}", state.collected(), state.collectibles_needed),
                theme.value(),
            ),
        ]),
        Line::from(Span::styled(CONTROLS, theme.label())),
    ];

    if let Some(text) = banner(state) {
        let style = match state.phase() {
            Phase::Over => theme.game_over(),
            _ => theme.level_complete(),
        };
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
