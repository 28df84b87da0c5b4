//! Keystroke producer feeding the game loop.
//!
//! A dedicated OS thread blocks on `crossterm` input and forwards each key
//! press into a bounded channel. It never touches game state.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

/// How long a single poll waits before re-checking whether the loop is gone.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawns the producer thread.
///
/// The thread stops when the receiver is dropped or when reading from the
/// terminal fails; in the latter case the channel closes and the game loop
/// carries on with timer ticks only.
pub fn spawn_keystroke_producer(tx_keys: mpsc::Sender<KeyEvent>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("keystroke-producer".into())
        .spawn(move || run_producer(tx_keys))
}

fn run_producer(tx_keys: mpsc::Sender<KeyEvent>) {
    loop {
        if tx_keys.is_closed() {
            tracing::debug!("Keystroke consumer gone, stopping producer");
            return;
        }

        match term_event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                tracing::warn!("Keystroke poll failed, input disabled: {}", e);
                return;
            }
        }

        let key = match term_event::read() {
            Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!("Keystroke read failed, input disabled: {}", e);
                return;
            }
        };

        if tx_keys.blocking_send(key).is_err() {
            tracing::debug!("Keystroke channel closed, stopping producer");
            return;
        }
    }
}
