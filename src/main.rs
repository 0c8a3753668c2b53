//! SpaceShip Cruiser entry point
//!
//! Windowed play needs a platform host; this binary runs the headless demo:
//! the autopilot steers, frames are recorded instead of drawn, and the ship
//! respawns one second after each crash.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use spaceship_cruiser::consts::TICK_HZ;
use spaceship_cruiser::platform::{FixedTimestep, HeldKeys};
use spaceship_cruiser::renderer::RecordingRenderer;
use spaceship_cruiser::sim::{GamePhase, TickInput, autopilot};
use spaceship_cruiser::{AudioManager, FileScoreStore, GameLoop, LogBackend, Settings};

const SETTINGS_PATH: &str = "settings.json";

fn main() {
    env_logger::init();
    log::info!("SpaceShip Cruiser (headless demo) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_PATH.to_string());
    let settings = Settings::load(&settings_path);

    let seed = settings.seed.unwrap_or_else(time_seed);
    let store = FileScoreStore::new(&settings.high_score_path);
    let mut audio = AudioManager::new(LogBackend);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut game = match GameLoop::new(seed, settings.tuning.clone(), store, audio) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let mut keys = HeldKeys::new();
    let mut renderer = RecordingRenderer::default();
    let mut timestep = FixedTimestep::default();

    let frame = Duration::from_secs_f32(timestep.step());
    let mut ticks: u64 = 0;
    let mut dead_ticks: u32 = 0;
    let mut deaths: u32 = 0;
    let mut best_life: u32 = 0;
    let mut last = Instant::now();

    while ticks < settings.demo_ticks {
        let now = Instant::now();
        let substeps = timestep.advance((now - last).as_secs_f32());
        last = now;

        for _ in 0..substeps {
            press_keys(&mut keys, autopilot(game.state()));
            let was_playing = game.phase() == GamePhase::Playing;
            game.on_tick(&keys);
            ticks += 1;

            match game.phase() {
                GamePhase::Playing => {}
                GamePhase::GameOver => {
                    if was_playing {
                        deaths += 1;
                        best_life = best_life.max(game.state().score);
                        dead_ticks = 0;
                    }
                    dead_ticks += 1;
                    if dead_ticks >= TICK_HZ {
                        keys.release_all();
                        game.on_restart();
                    }
                }
            }
        }

        renderer.clear();
        game.on_draw(&mut renderer);

        std::thread::sleep(frame.saturating_sub(now.elapsed()));
    }

    best_life = best_life.max(game.state().score);
    log::info!(
        "Demo (seed {}) finished after {} ticks: {} crashes, best life {}, high score {}",
        game.state().seed,
        ticks,
        deaths,
        best_life,
        game.state().high_score
    );
}

/// Feed the autopilot's choice through the keyboard path as key events
fn press_keys(keys: &mut HeldKeys, wanted: TickInput) {
    for (key, held) in [("ArrowLeft", wanted.left), ("ArrowRight", wanted.right)] {
        let Some(direction) = HeldKeys::direction_for_key(key) else {
            continue;
        };
        if held {
            keys.press(direction);
        } else {
            keys.release(direction);
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
