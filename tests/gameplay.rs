//! Whole-game scenarios driven through the game loop on a synthetic clock

use glidy_bird::consts::LIFT_KEY_CODE;
use glidy_bird::renderer::{Overlay, SceneRenderer};
use glidy_bird::sim::{GameMode, Profile, Scheduler, Timestamp};
use glidy_bird::{GameLoop, Settings};

const HZ: f64 = 60.0;

fn at(tick: u64) -> Timestamp {
    Timestamp::from_secs(tick as f64 / HZ)
}

/// Corridor with no walls at all
fn open_corridor() -> GameLoop {
    GameLoop::new(Settings::default().with_variation(0.0), 7).unwrap()
}

#[test]
fn lift_then_fall_to_the_floor() {
    let mut game = open_corridor();
    game.attach_renderer(SceneRenderer::new());

    game.key_down(LIFT_KEY_CODE, at(0));
    assert!(game.on_tick(at(0)));
    assert_eq!(game.mode(), GameMode::Running);

    // Two seconds of lift from rest
    for k in 1..=120 {
        assert!(game.on_tick(at(k)));
    }
    let state = game.simulation().state();
    assert_eq!(state.mode, GameMode::Running);
    assert!(state.player_y < 300.0);
    assert!((state.player_velocity + 2.0).abs() < 1e-3);
    assert_eq!(state.score, 120);

    game.key_up(LIFT_KEY_CODE, at(120));

    let mut tick = 121;
    while game.mode() == GameMode::Running {
        assert!(tick < 121 + 60 * 60, "player never landed");
        game.on_tick(at(tick));
        tick += 1;
    }

    let state = game.simulation().state();
    assert_eq!(state.mode, GameMode::Ended);
    assert!(state.player_y + 5.0 > 600.0);
    let final_score = state.score;
    assert_eq!(state.last_score, Some(final_score));
    assert_eq!(
        game.renderer().map(|r| r.overlay()),
        Some(Overlay::GameOver { score: final_score })
    );

    // Nothing moves after the end
    for k in tick..tick + 30 {
        game.on_tick(at(k));
    }
    assert_eq!(game.simulation().state().score, final_score);
}

#[test]
fn three_second_hold_rises_and_survives() {
    let mut game = open_corridor();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));
    for k in 1..=180 {
        game.on_tick(at(k));
    }

    let state = game.simulation().state();
    assert_eq!(state.mode, GameMode::Running);
    assert!(state.player_y < 300.0);
    assert!(state.player_y - 5.0 > 0.0);
    assert_eq!(state.score, 180);
}

#[test]
fn fresh_press_restarts_after_game_over() {
    let mut game = open_corridor();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.key_up(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));

    let mut tick = 1;
    while game.mode() == GameMode::Running {
        game.on_tick(at(tick));
        tick += 1;
    }
    let first = game.simulation().state().score;

    game.key_down(LIFT_KEY_CODE, at(tick));
    game.on_tick(at(tick));
    assert_eq!(game.mode(), GameMode::Running);
    assert_eq!(game.simulation().state().score, 0);
    assert_eq!(game.simulation().state().player_y, 300.0);
    assert_eq!(game.simulation().state().last_score, Some(first));
}

#[test]
fn autopilot_restart_after_long_idle_starts_at_rest() {
    let mut game = open_corridor();
    game.set_autopilot(true, at(0));
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));
    assert_eq!(game.mode(), GameMode::Running);

    // Crash into the ceiling straight away
    game.simulation_mut().state_mut().player_y = 1.0;
    game.on_tick(at(1));
    assert_eq!(game.mode(), GameMode::Ended);
    game.key_up(LIFT_KEY_CODE, at(1));

    // Thirty seconds later the start comes with no lift change
    let restart = Timestamp::from_secs(30.0);
    game.key_down(LIFT_KEY_CODE, restart);
    game.on_tick(restart);
    assert_eq!(game.mode(), GameMode::Running);
    game.on_tick(restart.after_secs(1.0 / HZ));

    let state = game.simulation().state();
    assert_eq!(state.mode, GameMode::Running);
    assert!(state.player_velocity.abs() < 0.1, "v={}", state.player_velocity);
    assert!((state.player_y - 300.0).abs() < 0.1, "y={}", state.player_y);
}

#[test]
fn restart_regenerates_the_corridor() {
    let settings = Settings::default();
    let mut game: GameLoop = GameLoop::new(settings.clone(), 11).unwrap();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.key_up(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));

    let mut tick = 1;
    while game.mode() == GameMode::Running {
        assert!(tick < 60 * 60, "run never ended");
        game.on_tick(at(tick));
        tick += 1;
    }
    let ended = game.simulation().state().corridor.clone();

    game.key_down(LIFT_KEY_CODE, at(tick));
    game.on_tick(at(tick));
    assert_eq!(game.mode(), GameMode::Running);

    let corridor = &game.simulation().state().corridor;
    assert_eq!(corridor.upper.len(), settings.wall_count);
    assert_eq!(corridor.lower.len(), settings.wall_count);
    assert_eq!(corridor.upper.get(0), 0.0);
    assert_eq!(corridor.lower.get(0), 0.0);
    assert_ne!(*corridor, ended);
}

#[test]
fn input_waits_for_the_next_tick() {
    let mut game = open_corridor();
    game.key_down(LIFT_KEY_CODE, at(0));
    assert_eq!(game.mode(), GameMode::NotStarted);
    game.on_tick(at(0));
    game.on_tick(at(1));

    let y = game.simulation().state().player_y;
    let velocity = game.simulation().state().player_velocity;
    game.key_up(LIFT_KEY_CODE, at(1));
    game.key_down(LIFT_KEY_CODE, at(1));
    assert_eq!(game.simulation().state().player_y, y);
    assert_eq!(game.simulation().state().player_velocity, velocity);
}

#[test]
fn early_frames_do_not_advance() {
    let mut game = open_corridor();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));

    // A 240 Hz display still advances at 60 Hz
    let mut ran = 0;
    for k in 1..=240 {
        if game.on_tick(Timestamp::from_secs(k as f64 / 240.0)) {
            ran += 1;
        }
    }
    assert_eq!(ran, 60);
    assert_eq!(game.simulation().state().score, 60);
}

#[test]
fn scrolling_corridor_moves_towards_the_player() {
    let mut game: GameLoop = GameLoop::new(Settings::default(), 99).unwrap();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));

    let before = game.simulation().state().corridor.clone();
    game.on_tick(at(1));
    let after = &game.simulation().state().corridor;

    assert_eq!(after.upper.len(), before.upper.len());
    for slot in 0..before.upper.len() - 1 {
        assert_eq!(after.upper.get(slot), before.upper.get(slot + 1));
        assert_eq!(after.lower.get(slot), before.lower.get(slot + 1));
    }
}

#[test]
fn static_corridor_never_scrolls() {
    let settings = Settings::static_wall();
    let mut game: GameLoop = GameLoop::new(settings.clone(), 3).unwrap();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));

    let corridor = game.simulation().state().corridor.clone();
    assert_eq!(
        corridor.upper,
        Profile::flat(settings.wall_count, settings.ceiling_thickness)
    );
    assert!(corridor.lower.max_step() <= settings.wall_variation + 1e-3);

    for k in 1..30 {
        game.on_tick(at(k));
    }
    assert_eq!(game.simulation().state().corridor, corridor);
}

#[test]
fn blur_releases_lift() {
    let mut game = open_corridor();
    game.key_down(LIFT_KEY_CODE, at(0));
    game.on_tick(at(0));
    assert!(game.simulation().intent().lift_held);

    game.blur(at(1));
    assert!(!game.simulation().intent().lift_held);

    // The key-up that eventually arrives changes nothing
    game.key_up(LIFT_KEY_CODE, at(2));
    assert_eq!(
        game.simulation().state().lift_engaged_since,
        Some(at(1))
    );
}
