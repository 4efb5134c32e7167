//! Standalone game binary.
//!
//! Usage:
//!   cargo run -p park_client -- [--config cfg.json] [--character dog_puppy]
//!                               [--seconds 30] [--trees 15] [--frame-hz 60]
//!                               [--seed N] [--debug]
//!
//! Runs a headless session: gamepad input if a pad is connected (keyboard
//! belongs to the windowing collaborator and is not wired here), UI updates
//! to the log, and the null renderer. The process exits with the final score
//! once the countdown ends.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use park_client::{game::Game, gamepad::GamepadPump, ui::LogUi};
use park_shared::{
    actor::CharacterModel,
    assets::{self, NullLoader},
    config::GameConfig,
    input::KeyboardState,
    render::NullRenderer,
    world,
};

struct Options {
    cfg: GameConfig,
    seed: Option<u64>,
    debug: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut opts = Options {
        cfg: GameConfig::default(),
        seed: None,
        debug: false,
    };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                let raw = std::fs::read_to_string(&args[i + 1])
                    .with_context(|| format!("read config {}", args[i + 1]))?;
                opts.cfg = GameConfig::from_json_str(&raw).context("parse config")?;
                i += 2;
            }
            "--character" if i + 1 < args.len() => {
                opts.cfg.character = args[i + 1].clone();
                i += 2;
            }
            "--seconds" if i + 1 < args.len() => {
                opts.cfg.session_seconds = args[i + 1].parse().unwrap_or(30);
                i += 2;
            }
            "--trees" if i + 1 < args.len() => {
                opts.cfg.tree_count = args[i + 1].parse().unwrap_or(world::TREE_COUNT);
                i += 2;
            }
            "--frame-hz" if i + 1 < args.len() => {
                opts.cfg.frame_hz = args[i + 1].parse().unwrap_or(60);
                i += 2;
            }
            "--seed" if i + 1 < args.len() => {
                opts.seed = args[i + 1].parse().ok();
                i += 2;
            }
            "--debug" => {
                opts.debug = true;
                i += 1;
            }
            _ => i += 1,
        }
    }
    Ok(opts)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let opts = parse_args()?;
    let cfg = &opts.cfg;
    let model: CharacterModel = cfg.character.parse().context("parse --character")?;
    info!(
        character = model.asset_id(),
        seconds = cfg.session_seconds,
        trees = cfg.tree_count,
        frame_hz = cfg.frame_hz,
        "Starting game"
    );

    // No asset backend in the headless binary; this exercises the fallback.
    let character = assets::load_or_fallback(&NullLoader, model).await;

    let mut rng: StdRng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::thread_rng().gen()),
    };
    let targets = world::generate_targets(&mut rng, cfg.tree_count);

    let mut game = Game::new(
        model,
        character,
        targets,
        cfg.session_seconds,
        NullRenderer,
        LogUi::default(),
        Instant::now(),
    );
    game.set_debug_overlay(opts.debug);

    let mut pad_pump = GamepadPump::new();

    let frame_interval = Duration::from_secs_f32(1.0 / cfg.frame_hz as f32);
    let mut next_frame = tokio::time::Instant::now();
    let keys = KeyboardState::default();

    while game.session().is_active() {
        let pad = pad_pump.as_mut().and_then(|p| p.poll());
        game.advance(Instant::now(), &keys, pad.as_ref());

        next_frame += frame_interval;
        tokio::time::sleep_until(next_frame).await;
    }

    info!(final_score = game.session().score, "Exiting");
    Ok(())
}
