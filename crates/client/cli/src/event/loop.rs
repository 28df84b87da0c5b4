//! Event loop orchestrating timer ticks, user input, and rendering.
//!
//! Exactly one task owns the [`GameEngine`]. Each iteration waits for the
//! earlier of the next adversary tick or the next keystroke, applies that one
//! event to the engine, and asks the renderer for a full redraw.

use crossterm::event::KeyEvent;
use game_core::{Direction, GameEngine, Phase, PlayerMove, RngOracle};
use tokio::{
    sync::mpsc,
    time::{self, Duration, Instant, MissedTickBehavior},
};

use crate::{
    input::{InputHandler, KeyAction},
    presentation::Renderer,
};

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player pressed the quit key.
    Quit { score: u32, level: u32 },
    /// An adversary caught the player.
    GameOver { score: u32, level: u32 },
}

enum Trigger {
    Tick,
    Key(Option<KeyEvent>),
}

enum Flow {
    Continue,
    Exit(SessionEnd),
}

pub struct EventLoop<G> {
    engine: GameEngine<G>,
    input: InputHandler,
    rx_keys: Option<mpsc::Receiver<KeyEvent>>,
    tick_interval: Duration,
    /// Set while draws keep failing, so only the first failure is a warning.
    render_failing: bool,
}

impl<G: RngOracle> EventLoop<G> {
    pub fn new(
        engine: GameEngine<G>,
        rx_keys: mpsc::Receiver<KeyEvent>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            engine,
            input: InputHandler::new(),
            rx_keys: Some(rx_keys),
            tick_interval,
            render_failing: false,
        }
    }

    /// Drives the session until the player quits or is caught.
    ///
    /// Render failures are logged and never end the session.
    pub async fn run<R: Renderer>(mut self, renderer: &mut R) -> SessionEnd {
        self.log_level_start();
        self.render(renderer);

        let mut ticker = time::interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut rx_keys = self.rx_keys.take();

        loop {
            let trigger = tokio::select! {
                _ = ticker.tick() => Trigger::Tick,
                key = recv_key(&mut rx_keys), if rx_keys.is_some() => Trigger::Key(key),
            };

            let flow = match trigger {
                Trigger::Tick => self.handle_tick(renderer),
                Trigger::Key(Some(key)) => self.handle_key(key, renderer),
                Trigger::Key(None) => {
                    tracing::warn!("Keystroke channel closed; continuing on timer ticks only");
                    rx_keys = None;
                    Flow::Continue
                }
            };

            if let Flow::Exit(end) = flow {
                return end;
            }
        }
    }

    fn handle_tick<R: Renderer>(&mut self, renderer: &mut R) -> Flow {
        let Some(outcome) = self.engine.tick() else {
            return Flow::Continue;
        };
        tracing::trace!(?outcome, "Adversary tick");

        self.render(renderer);

        if self.engine.phase() == Phase::Over {
            let state = self.engine.state();
            tracing::info!(
                "Player caught at {:?} on level {} with score {}",
                state.player,
                state.level,
                state.score
            );
            return Flow::Exit(SessionEnd::GameOver {
                score: state.score,
                level: state.level,
            });
        }

        Flow::Continue
    }

    fn handle_key<R: Renderer>(&mut self, key: KeyEvent, renderer: &mut R) -> Flow {
        match self.engine.phase() {
            Phase::Over => return Flow::Continue,
            Phase::Won => {
                if self.engine.advance_level() {
                    self.log_level_start();
                }
            }
            Phase::Playing => match self.input.handle_key(key) {
                KeyAction::Quit => {
                    let state = self.engine.state();
                    tracing::info!("Quit requested on level {}", state.level);
                    return Flow::Exit(SessionEnd::Quit {
                        score: state.score,
                        level: state.level,
                    });
                }
                KeyAction::Move(direction) => self.move_player(direction),
                KeyAction::None => {}
            },
        }

        self.render(renderer);
        Flow::Continue
    }

    fn move_player(&mut self, direction: Direction) {
        let Some(outcome) = self.engine.move_player(direction) else {
            return;
        };

        match outcome {
            PlayerMove::Collected { to, remaining } => {
                tracing::debug!("Collected item at {:?}, {} left", to, remaining);
                if self.engine.phase() == Phase::Won {
                    let state = self.engine.state();
                    tracing::info!("Level {} complete, score {}", state.level, state.score);
                }
            }
            PlayerMove::Blocked { destination } | PlayerMove::OutOfBounds { destination } => {
                tracing::trace!("Move {} to {:?} rejected", direction.as_str(), destination);
            }
            PlayerMove::Moved { .. } => {}
        }
    }

    fn log_level_start(&self) {
        let state = self.engine.state();
        tracing::info!(
            level = state.level,
            collectibles = state.collectibles.len(),
            adversaries = state.adversaries.len(),
            obstacles = state.obstacles.len(),
            "Level started"
        );
    }

    fn render<R: Renderer>(&mut self, renderer: &mut R) {
        match renderer.render(self.engine.state(), self.engine.grid()) {
            Ok(()) => {
                if self.render_failing {
                    tracing::info!("Rendering recovered");
                    self.render_failing = false;
                }
            }
            Err(e) if !self.render_failing => {
                tracing::warn!("Render failed, continuing without redraw: {:#}", e);
                self.render_failing = true;
            }
            Err(e) => tracing::debug!("Render still failing: {:#}", e),
        }
    }
}

async fn recv_key(rx_keys: &mut Option<mpsc::Receiver<KeyEvent>>) -> Option<KeyEvent> {
    match rx_keys {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use anyhow::Result;
    use game_core::{Adversary, GameConfig, GameState, Grid, PcgRng, Position};

    const TICK: Duration = Duration::from_millis(300);

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<GameState>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, state: &GameState, _grid: &Grid) -> Result<()> {
            self.frames.push(state.clone());
            Ok(())
        }
    }

    /// Counts draw attempts and fails every one of them.
    #[derive(Default)]
    struct BrokenRenderer {
        attempts: usize,
    }

    impl Renderer for BrokenRenderer {
        fn render(&mut self, _state: &GameState, _grid: &Grid) -> Result<()> {
            self.attempts += 1;
            anyhow::bail!("terminal went away")
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn player() -> Position {
        Position::new(20, 10)
    }

    /// Quiet level: one far collectible, nothing that can reach the player.
    fn quiet_state() -> GameState {
        let mut state = GameState::new(player());
        state.collectibles_needed = 1;
        state.collectibles = vec![Position::new(2, 2)];
        state
    }

    /// One adversary directly above the player, heading down.
    fn doomed_state() -> GameState {
        let mut state = quiet_state();
        state.adversaries = vec![Adversary::new(Position::new(20, 9), Direction::Down)];
        state
    }

    fn event_loop(state: GameState) -> (EventLoop<PcgRng>, mpsc::Sender<KeyEvent>) {
        let engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(9));
        let (tx, rx) = mpsc::channel(8);
        (EventLoop::new(engine, rx, TICK), tx)
    }

    #[tokio::test(start_paused = true)]
    async fn quit_exits_without_rendering() {
        let (event_loop, tx) = event_loop(quiet_state());
        tx.send(key(KeyCode::Char('q'))).await.unwrap();

        let mut renderer = RecordingRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::Quit { score: 0, level: 1 });
        assert_eq!(renderer.frames.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn catch_on_tick_ends_session_after_final_render() {
        let (event_loop, _tx) = event_loop(doomed_state());
        let started = Instant::now();

        let mut renderer = RecordingRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::GameOver { score: 0, level: 1 });
        assert!(started.elapsed() >= TICK);
        let last = renderer.frames.last().unwrap();
        assert!(last.over);
        assert_eq!(last.adversaries[0].position, player());
    }

    #[tokio::test(start_paused = true)]
    async fn movement_and_unknown_keys_render() {
        let (event_loop, tx) = event_loop(quiet_state());
        tx.send(key(KeyCode::Char('a'))).await.unwrap();
        tx.send(key(KeyCode::Char('x'))).await.unwrap();
        tx.send(key(KeyCode::Char('q'))).await.unwrap();

        let mut renderer = RecordingRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::Quit { score: 0, level: 1 });
        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.frames[1].player, Position::new(19, 10));
        assert_eq!(renderer.frames[2].player, Position::new(19, 10));
    }

    #[tokio::test(start_paused = true)]
    async fn any_key_advances_after_level_complete() {
        let mut state = quiet_state();
        state.collectibles = vec![Position::new(21, 10)];
        let (event_loop, tx) = event_loop(state);

        tx.send(key(KeyCode::Right)).await.unwrap();
        // While won, even the quit key only starts the next level.
        tx.send(key(KeyCode::Char('q'))).await.unwrap();
        tx.send(key(KeyCode::Char('q'))).await.unwrap();

        let mut renderer = RecordingRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::Quit { score: 10, level: 2 });
        assert_eq!(renderer.frames.len(), 3);
        assert!(renderer.frames[1].won);
        let next = &renderer.frames[2];
        assert!(!next.won);
        assert_eq!(next.level, 2);
        assert_eq!(next.score, 10);
        assert_eq!(next.collectibles.len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_are_paused_while_level_complete() {
        let mut state = doomed_state();
        state.won = true;
        let (event_loop, tx) = event_loop(state);

        let handle = tokio::spawn(async move {
            let mut renderer = RecordingRenderer::default();
            let end = event_loop.run(&mut renderer).await;
            (end, renderer)
        });

        time::sleep(TICK * 5 + TICK / 2).await;
        // Release the loop: advance to level 2, then quit.
        tx.send(key(KeyCode::Char(' '))).await.unwrap();
        tx.send(key(KeyCode::Char('q'))).await.unwrap();

        let (end, renderer) = handle.await.unwrap();
        assert_eq!(end, SessionEnd::Quit { score: 0, level: 2 });
        assert!(renderer.frames.iter().all(|frame| !frame.over));
        assert_eq!(renderer.frames.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_keeps_ticking() {
        let (event_loop, tx) = event_loop(doomed_state());
        drop(tx);

        let mut renderer = RecordingRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::GameOver { score: 0, level: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn keys_are_ignored_once_over() {
        let mut state = quiet_state();
        state.over = true;
        let (mut event_loop, _tx) = event_loop(state);
        let mut renderer = RecordingRenderer::default();

        let flow = event_loop.handle_key(key(KeyCode::Char('q')), &mut renderer);

        assert!(matches!(flow, Flow::Continue));
        assert!(renderer.frames.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn render_failures_do_not_end_the_session() {
        let (event_loop, tx) = event_loop(doomed_state());
        tx.send(key(KeyCode::Char('x'))).await.unwrap();

        let mut renderer = BrokenRenderer::default();
        let end = event_loop.run(&mut renderer).await;

        assert_eq!(end, SessionEnd::GameOver { score: 0, level: 1 });
        // Initial frame, the unknown key, then the catching tick.
        assert_eq!(renderer.attempts, 3);
    }
}
