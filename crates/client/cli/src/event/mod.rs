//! Event handling for the CLI client.
//!
//! This module contains the single-consumer loop that merges the adversary
//! clock with the keystroke queue and drives the engine.

mod r#loop;

pub use r#loop::{EventLoop, SessionEnd};
