//! Bullet Dodge headless runner
//!
//! Runs a seeded session with a scripted player on the built-in arena and
//! prints the final frame as JSON. Useful for checking determinism and
//! difficulty pacing without a window.
//!
//! Usage: `bullet-dodge [seed] [ticks] [tuning.json]`

use bullet_dodge::consts::SIM_DT;
use bullet_dodge::sim::{Game, Intent, LevelGeometry};
use bullet_dodge::{AudioManager, LogAudio, Tuning};

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_TICKS: u64 = 60 * 60;

/// Scripted input for tick `t`: pace back and forth, hop now and then
fn scripted_input(game: &mut Game, t: u64) {
    let phase = (t / 90) % 2;
    game.on_intent_changed(Intent::Right, phase == 0);
    game.on_intent_changed(Intent::Left, phase == 1);
    game.on_intent_changed(Intent::Up, t % 40 < 2);
}

/// Parse an optional numeric argument, warning when it is not a number
fn parse_arg(arg: Option<String>, name: &str, default: u64) -> u64 {
    match arg {
        None => default,
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Invalid {name} '{s}' ({e}), using default {default}");
                default
            }
        },
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED);
    let ticks = parse_arg(args.next(), "ticks", DEFAULT_TICKS);
    let tuning = args.next().map(Tuning::load).unwrap_or_default();

    log::info!("Bullet Dodge (headless) starting: seed={seed}, ticks={ticks}");

    let mut game = Game::with_tuning(seed, LevelGeometry::arena(), tuning);
    let mut audio = AudioManager::new(LogAudio::default());

    let mut last = None;
    for t in 0..ticks {
        scripted_input(&mut game, t);
        let snapshot = game.on_tick(SIM_DT);
        audio.handle_events(&snapshot.events);
        last = Some(snapshot);
    }

    let stats = &game.state().stats;
    log::info!(
        "Finished: {} ticks, best score {}, resets {} (fell {}, hit {}), {} projectiles spawned",
        game.state().time_ticks,
        stats.best_score.max(game.state().score),
        stats.total_resets(),
        stats.resets_fell,
        stats.resets_hit,
        stats.projectiles_spawned
    );

    if let Some(snapshot) = last {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize final frame: {e}"),
        }
    }
}
