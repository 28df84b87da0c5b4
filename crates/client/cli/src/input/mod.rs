//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the game loop can
//! remain agnostic about concrete key bindings or the specifics of
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Direction;

pub mod provider;
pub use provider::spawn_keystroke_producer;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Step the player one cell.
    Move(Direction),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands using the fixed key map.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'w' => KeyAction::Move(Direction::Up),
            's' => KeyAction::Move(Direction::Down),
            'a' => KeyAction::Move(Direction::Left),
            'd' => KeyAction::Move(Direction::Right),
            _ => KeyAction::None,
        }
    }
}
