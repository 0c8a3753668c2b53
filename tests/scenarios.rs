//! End-to-end runs through the host-facing loop

use glam::IVec2;

use spaceship_cruiser::audio::CueLog;
use spaceship_cruiser::renderer::{DrawCommand, RecordingRenderer, Sprite};
use spaceship_cruiser::sim::{GamePhase, TickInput, autopilot};
use spaceship_cruiser::{FileScoreStore, GameLoop, MemoryScoreStore, ScoreStore, SoundCue, Tuning};

fn quiet_tuning() -> Tuning {
    Tuning {
        spawn_one_in: 0,
        ..Tuning::default()
    }
}

#[test]
fn obstacle_survives_tick_130_and_scores_on_131() {
    let mut game = GameLoop::new(1, quiet_tuning(), MemoryScoreStore::default(), CueLog::default()).unwrap();
    game.state_mut().player_x = 0;
    game.state_mut().push_obstacle(IVec2::new(375, -50), 5);

    for _ in 0..130 {
        game.on_tick(&TickInput::NONE);
    }
    assert_eq!(game.state().obstacles[0].pos.y, 600);
    assert_eq!(game.state().score, 0);

    game.on_tick(&TickInput::NONE);
    assert!(game.state().obstacles.is_empty());
    assert_eq!(game.state().score, 1);
    assert_eq!(game.state().high_score, 1);
}

#[test]
fn crash_persists_high_score_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "2").unwrap();

    let mut game = GameLoop::new(1, quiet_tuning(), FileScoreStore::new(&path), CueLog::default()).unwrap();
    assert_eq!(game.state().high_score, 2);

    game.state_mut().player_x = 0;
    for _ in 0..4 {
        game.state_mut().push_obstacle(IVec2::new(600, 600), 5);
        game.on_tick(&TickInput::NONE);
    }
    game.state_mut().push_obstacle(IVec2::new(10, 515), 5);
    game.on_tick(&TickInput::NONE);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.sound().cues, vec![SoundCue::Death]);
    assert_eq!(FileScoreStore::new(&path).load(), 4);
}

#[test]
fn restart_keeps_high_score_and_recenters() {
    let mut game = GameLoop::new(1, quiet_tuning(), MemoryScoreStore::with_value(10), CueLog::default()).unwrap();
    for _ in 0..20 {
        game.on_tick(&TickInput::LEFT);
    }
    let x = game.state().player_x;
    game.state_mut().push_obstacle(IVec2::new(x, 515), 5);
    game.on_tick(&TickInput::NONE);
    assert_eq!(game.phase(), GamePhase::GameOver);

    assert!(game.on_restart());
    assert_eq!(game.state().player_x, 375);
    assert_eq!(game.state().high_score, 10);
    assert!(!game.on_restart());
}

#[test]
fn meteorite_textures_are_stable_between_frames() {
    let mut game = GameLoop::new(42, Tuning::default(), MemoryScoreStore::default(), CueLog::default()).unwrap();
    let mut first = RecordingRenderer::default();
    let mut second = RecordingRenderer::default();

    // Run until something is on screen
    for _ in 0..600 {
        let input = autopilot(game.state());
        game.on_tick(&input);
        if game.state().obstacles.len() >= 2 {
            break;
        }
    }

    game.on_draw(&mut first);
    game.on_draw(&mut second);
    assert_eq!(first.commands, second.commands);

    let textures: Vec<Sprite> = first
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Sprite { sprite: s @ Sprite::Meteorite(_), .. } => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(textures.len(), game.state().obstacles.len());
}

#[test]
fn autopilot_demo_runs_with_respawns() {
    let mut game = GameLoop::new(2024, Tuning::default(), MemoryScoreStore::default(), CueLog::default()).unwrap();
    let mut deaths = 0;
    for _ in 0..20_000 {
        let input = autopilot(game.state());
        game.on_tick(&input);
        if game.phase() == GamePhase::GameOver {
            deaths += 1;
            game.on_restart();
        }
    }
    assert_eq!(game.store().saves.len(), deaths);
    assert!(game.state().high_score >= game.state().score);
}
