//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::IVec2;
use rand::Rng;

use super::input::{Direction, InputSource};
use super::state::{GameEvent, GamePhase, GameState, Obstacle};

/// Advance the game state by one fixed timestep.
///
/// Returns the events raised during the tick, in the order they happened.
/// Nothing changes while the game is over.
pub fn tick(state: &mut GameState, input: &impl InputSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    steer(state, input);

    let player = state.player_hitbox();
    let field_height = state.tuning.field_height;
    let block_size = state.tuning.block_size;
    let spin = state.tuning.spin_per_tick;

    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        obstacle.fall(spin);

        if obstacle.pos.y > field_height {
            state.obstacles.remove(i);
            record_clear(state, &mut events);
            continue;
        }

        if player.intersects(&obstacle.hitbox(block_size)) {
            state.phase = GamePhase::GameOver;
            state.obstacles.clear();
            log::info!(
                "Ship destroyed at tick {} (score {}, best {})",
                state.time_ticks,
                state.score,
                state.high_score
            );
            events.push(GameEvent::PlayerHit {
                score: state.score,
                high_score: state.high_score,
            });
            // Remaining obstacles and the spawn roll are skipped
            return events;
        }

        i += 1;
    }

    maybe_spawn(state);

    events
}

/// Both keys are checked independently; holding both cancels out.
fn steer(state: &mut GameState, input: &impl InputSource) {
    let step = state.tuning.player_step;
    let max_x = state.tuning.max_player_x();

    if input.is_held(Direction::Left) && state.player_x > 0 {
        state.player_x -= step;
    }
    if input.is_held(Direction::Right) && state.player_x < max_x {
        state.player_x += step;
    }
    state.player_x = state.player_x.clamp(0, max_x.max(0));
}

fn record_clear(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    events.push(GameEvent::ObstacleCleared { score: state.score });

    if state.score > state.high_score {
        state.high_score = state.score;
        // Announce only the first time the stored best is passed this life
        if state.score == state.life_start_high_score + 1 {
            log::info!("New high score: {}", state.high_score);
            events.push(GameEvent::NewHighScore {
                high_score: state.high_score,
            });
        }
    }

    if state.tuning.is_point_milestone(state.score) {
        events.push(GameEvent::PointMilestone { score: state.score });
    }
}

/// Roll the per-tick spawn chance and drop a new meteorite in at the top
fn maybe_spawn(state: &mut GameState) {
    let one_in = state.tuning.spawn_one_in;
    if one_in == 0 || state.rng.random_range(0..one_in) != 0 {
        return;
    }
    spawn_obstacle(state);
}

/// Spawn one obstacle at a random column just above the field
pub fn spawn_obstacle(state: &mut GameState) -> u32 {
    let max_x = (state.tuning.field_width - state.tuning.block_size).max(0);
    let x = state.rng.random_range(0..=max_x);
    let texture = state.rng.random_range(0..state.tuning.meteorite_textures.max(1));
    let fall_speed = state.tuning.fall_speed_for(state.score);

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle::new(
        id,
        IVec2::new(x, -state.tuning.block_size),
        fall_speed,
        texture,
    ));
    log::debug!("Spawned obstacle {} at x={} speed={}", id, x, fall_speed);
    id
}
