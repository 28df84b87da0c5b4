use game_core::{
    Adversary, Direction, GameConfig, GameEngine, GameState, Grid, PcgRng, Phase, PlayerMove,
    Position,
};

const SEED: u64 = 0x5eed;

fn seeded_engine() -> GameEngine<PcgRng> {
    GameEngine::new(GameConfig::default(), PcgRng::seeded(SEED))
}

/// Rebuilds an engine around a hand-edited copy of its state.
fn with_state(edit: impl FnOnce(&mut GameState)) -> GameEngine<PcgRng> {
    let mut state = seeded_engine().state().clone();
    edit(&mut state);
    GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED))
}

/// Blank level-1 state: player at the centre, nothing else on the board.
fn empty_state() -> GameState {
    GameState::new(Grid::default().center())
}

#[test]
fn obstacle_north_of_start_blocks_player() {
    let mut engine = with_state(|state| {
        state.obstacles = vec![state.player.step(Direction::Up)];
    });
    let start = engine.state().player;

    let outcome = engine.move_player(Direction::Up);

    assert!(matches!(outcome, Some(PlayerMove::Blocked { .. })));
    assert_eq!(engine.state().player, start);
    assert!(!engine.state().over);
    assert!(!engine.state().won);
}

#[test]
fn picking_last_collectible_completes_level() {
    let mut state = empty_state();
    state.collectibles = vec![state.player.step(Direction::Right)];
    state.collectibles_needed = 1;
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    engine.move_player(Direction::Right);

    let state = engine.state();
    assert_eq!(state.score, 10);
    assert!(state.collectibles.is_empty());
    assert!(state.won);
    assert_eq!(engine.phase(), Phase::Won);
}

#[test]
fn adjacent_adversary_facing_player_catches_on_next_tick() {
    let mut state = empty_state();
    let player = state.player;
    state.collectibles = vec![Position::new(1, 1)];
    state.collectibles_needed = 1;
    state.adversaries = vec![Adversary::new(
        player.step(Direction::Left),
        Direction::Right,
    )];
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    let tick = engine.tick().expect("tick runs while playing");

    assert!(tick.caught_player);
    assert!(engine.state().over);
    assert!(!engine.state().won);
}

#[test]
fn game_over_stays_over() {
    let mut state = empty_state();
    let player = state.player;
    state.collectibles = vec![Position::new(1, 1)];
    state.adversaries = vec![Adversary::new(player.step(Direction::Up), Direction::Down)];
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    engine.tick();
    assert!(engine.state().over);

    for _ in 0..50 {
        engine.tick();
        engine.move_player(Direction::Right);
        assert!(engine.state().over);
    }
}

#[test]
fn won_persists_until_level_is_advanced() {
    let mut state = empty_state();
    state.collectibles = vec![state.player.step(Direction::Down)];
    state.collectibles_needed = 1;
    state.adversaries = vec![Adversary::new(Position::new(1, 1), Direction::Right)];
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    engine.move_player(Direction::Down);
    for _ in 0..20 {
        assert_eq!(engine.tick(), None);
        assert!(engine.state().won);
    }
    assert_eq!(engine.state().adversaries[0].position, Position::new(1, 1));

    assert!(engine.advance_level());
    assert!(!engine.state().won);
    assert_eq!(engine.state().level, 2);
    assert_eq!(engine.state().score, 10);
}

#[test]
fn blocked_adversary_rerolls_facing_uniformly() {
    const TRIALS: usize = 4_000;

    let boxed = Position::new(5, 5);
    let mut state = empty_state();
    state.collectibles = vec![Position::new(30, 15)];
    state.adversaries = vec![Adversary::new(boxed, Direction::Up)];
    state.obstacles = Direction::ALL.iter().map(|d| boxed.step(*d)).collect();
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    let mut counts = [0usize; 4];
    for _ in 0..TRIALS {
        let tick = engine.tick().expect("still playing");
        assert_eq!(tick.blocked, 1);

        let adversary = engine.state().adversaries[0];
        assert_eq!(adversary.position, boxed);
        let idx = Direction::ALL
            .iter()
            .position(|d| *d == adversary.facing)
            .expect("known facing");
        counts[idx] += 1;
    }

    let expected = TRIALS / 4;
    for (idx, count) in counts.iter().enumerate() {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "{:?} drawn {count} times, expected about {expected}",
            Direction::ALL[idx]
        );
    }
}

#[test]
fn chase_rate_is_about_thirty_percent() {
    const TRIALS: usize = 5_000;

    // Wall the player in so the run never ends in a catch.
    let mut state = empty_state();
    let player = state.player;
    state.obstacles = Direction::ALL.iter().map(|d| player.step(*d)).collect();
    state.collectibles = vec![Position::new(1, 1)];
    state.adversaries = vec![Adversary::new(Position::new(3, 3), Direction::Right)];
    let mut engine = GameEngine::from_state(GameConfig::default(), state, PcgRng::seeded(SEED));

    let chased: usize = (0..TRIALS)
        .map(|_| engine.tick().expect("player is unreachable").retargeted)
        .sum();

    let rate = chased as f64 / TRIALS as f64;
    assert!((0.27..0.33).contains(&rate), "chase rate {rate}");
}

#[test]
fn generated_levels_respect_interior_and_sizes() {
    let mut engine = seeded_engine();
    let grid = *engine.grid();

    for level in 1..=8u32 {
        let state = engine.state();
        assert_eq!(state.level, level);
        assert_eq!(state.player, grid.center());
        assert_eq!(state.collectibles_needed, 5 + 2 * level);
        assert_eq!(state.collectibles.len() as u32, 5 + 2 * level);
        assert_eq!(state.adversaries.len() as u32, 1 + level / 2);
        assert_eq!(state.obstacles.len() as u32, 10 + 3 * level);
        assert!(
            state
                .collectibles
                .iter()
                .chain(state.obstacles.iter())
                .chain(state.adversaries.iter().map(|a| &a.position))
                .all(|p| grid.is_inside_interior(*p))
        );

        let mut won = state.clone();
        won.won = true;
        won.collectibles.clear();
        engine = GameEngine::from_state(GameConfig::default(), won, PcgRng::seeded(level as u64));
        assert!(engine.advance_level());
    }
}
