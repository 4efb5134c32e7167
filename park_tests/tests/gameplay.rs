//! End-to-end gameplay scenarios driving the real frame loop.

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use park_client::Game;
use park_shared::{
    actor::CharacterModel,
    assets,
    input::{GamepadSnapshot, KeyboardState},
    math::Vec2,
    movement::{WORLD_BOUND, ZOOM_MAX, ZOOM_MIN},
    scoring::Phase,
    world::Target,
};
use park_tests::{CountingRenderer, RecordingUi};
use rand::{rngs::StdRng, Rng, SeedableRng};

type TestGame = Game<CountingRenderer, RecordingUi>;

fn new_game(targets: Vec<Target>, seconds: u32) -> TestGame {
    Game::new(
        CharacterModel::Puppy,
        assets::fallback_character(),
        targets,
        seconds,
        CountingRenderer::default(),
        RecordingUi::default(),
        Instant::now(),
    )
}

/// One target at (10, 0): walk within 2 units, see the hint, mark once.
#[test]
fn mark_single_target_end_to_end() {
    let mut game = new_game(vec![Target::new(Vec2::new(10.0, 0.0))], 30);

    // Movement runs along (sin h, cos h), so facing the target on +X means
    // heading +PI/2. Turning left increases the heading; drive it via input
    // like a player would (32 frames at 0.05 rad/tick).
    let turn = KeyboardState {
        turn_left: true,
        ..Default::default()
    };
    while game.actor().heading < FRAC_PI_2 {
        game.frame(&turn, None);
    }

    // Walk forward for 60 frames: 60 * 0.15 = 9 units, ending near (9, 0).
    let forward = KeyboardState {
        forward: true,
        ..Default::default()
    };
    for _ in 0..60 {
        game.frame(&forward, None);
    }
    let actor_pos = game.actor().position;
    assert!(
        actor_pos.dist(Vec2::new(10.0, 0.0)) < 2.0,
        "actor should be within 2 units, got {actor_pos:?}"
    );
    assert!(game.ui().markable, "markable hint must be up in range");

    let action = KeyboardState {
        action: true,
        ..Default::default()
    };
    game.frame(&action, None);
    assert_eq!(game.session().score, 10);
    assert!(game.targets()[0].marked);
    assert_eq!(game.ui().score, 10);

    // Firing again never re-scores.
    game.frame(&action, None);
    assert_eq!(game.session().score, 10);
    assert_eq!(game.ui().score_updates, vec![0, 10]);
}

#[test]
fn timer_runs_session_to_terminal_state() {
    let mut game = new_game(vec![Target::new(Vec2::new(10.0, 0.0))], 30);

    for _ in 0..30 {
        game.second_tick();
    }
    assert_eq!(game.session().phase, Phase::Ended);
    assert_eq!(game.session().time_left, 0);
    assert_eq!(game.ui().summary, Some(0));

    // Further ticks leave the clock at zero.
    game.second_tick();
    assert_eq!(game.session().time_left, 0);

    // Frame ticks keep rendering the frozen scene without mutating state.
    let before_frames = game.renderer().frames;
    let keys = KeyboardState {
        forward: true,
        action: true,
        ..Default::default()
    };
    game.frame(&keys, None);
    assert_eq!(game.renderer().frames, before_frames + 1);
    assert_eq!(game.actor().position, Vec2::ZERO);
    assert_eq!(game.session().score, 0);
}

/// Random input sequences never push the actor off the world or the zoom out
/// of its clamp.
#[test]
fn random_walk_respects_clamps() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = new_game(vec![Target::new(Vec2::new(10.0, 0.0))], u32::MAX);

    for _ in 0..5_000 {
        let pad = GamepadSnapshot {
            move_x: rng.gen_range(-1.0..1.0),
            move_y: rng.gen_range(-1.0..1.0),
            look_x: rng.gen_range(-1.0..1.0),
            look_y: rng.gen_range(-1.0..1.0),
            action: rng.gen_bool(0.1),
            reset_camera: rng.gen_bool(0.01),
        };
        game.frame(&KeyboardState::default(), Some(&pad));

        let pos = game.actor().position;
        assert!(pos.x.abs() <= WORLD_BOUND && pos.z.abs() <= WORLD_BOUND);
        let dist = game.camera().distance;
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&dist));
    }
}

/// Gamepad analog magnitude scales movement; keyboard stays binary.
#[test]
fn analog_input_moves_slower_than_keyboard() {
    let mut kb_game = new_game(vec![Target::new(Vec2::new(20.0, 20.0))], 30);
    let mut pad_game = new_game(vec![Target::new(Vec2::new(20.0, 20.0))], 30);

    let keys = KeyboardState {
        forward: true,
        ..Default::default()
    };
    let pad = GamepadSnapshot {
        move_y: -0.4,
        ..Default::default()
    };
    for _ in 0..10 {
        kb_game.frame(&keys, None);
        pad_game.frame(&KeyboardState::default(), Some(&pad));
    }
    let kb_dist = kb_game.actor().position.len();
    let pad_dist = pad_game.actor().position.len();
    assert!((kb_dist - 1.5).abs() < 1e-4);
    assert!((pad_dist - 0.6).abs() < 1e-4);
}
