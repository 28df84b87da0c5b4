//! Widget modules for UI rendering.
//!
//! Each widget reads the game state without mutating it and draws into a
//! region of the frame.

pub mod playfield;
pub mod status;
