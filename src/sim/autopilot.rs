//! Idle/demo mode steering
//!
//! Picks the obstacle that will reach the ship's row soonest among those
//! sharing (or about to share) its columns and steers toward whichever side
//! has more open room.

use super::input::TickInput;
use super::state::{GamePhase, GameState, Obstacle};

/// Extra columns of clearance the autopilot keeps around the ship
const SAFETY_MARGIN: i32 = 12;

/// Choose the keys to hold for the next tick
pub fn autopilot(state: &GameState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::NONE;
    }

    let tuning = &state.tuning;
    let ship = state.player_hitbox();
    let ship_top = ship.min.y;
    let left_edge = ship.min.x - SAFETY_MARGIN;
    let right_edge = ship.max().x + SAFETY_MARGIN;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.pos.y < ship.max().y)
        .filter(|o| o.pos.x < right_edge && o.pos.x + tuning.block_size > left_edge)
        .min_by_key(|o| ticks_until_row(o, ship_top, tuning.block_size));

    let Some(threat) = threat else {
        return drift_to_center(state);
    };

    let threat_center = threat.pos.x + tuning.block_size / 2;
    let room_left = threat.pos.x;
    let room_right = tuning.field_width - (threat.pos.x + tuning.block_size);

    // Run away from the threat's center unless that wall is too close
    let ship_center = ship.center().x;
    let prefer_left = if ship_center == threat_center {
        room_left >= room_right
    } else {
        ship_center < threat_center
    };
    let go_left = if prefer_left {
        room_left >= tuning.player_size + SAFETY_MARGIN || room_right < tuning.player_size
    } else {
        room_right < tuning.player_size + SAFETY_MARGIN && room_left >= tuning.player_size
    };

    if go_left {
        TickInput::LEFT
    } else {
        TickInput::RIGHT
    }
}

fn ticks_until_row(obstacle: &Obstacle, row: i32, block_size: i32) -> i32 {
    let gap = row - (obstacle.pos.y + block_size);
    if gap <= 0 {
        0
    } else {
        gap / obstacle.fall_speed.max(1)
    }
}

/// With nothing overhead, slide back toward the middle
fn drift_to_center(state: &GameState) -> TickInput {
    let center = state.tuning.center_player_x();
    let delta = state.player_x - center;
    if delta.abs() <= state.tuning.player_step {
        TickInput::NONE
    } else if delta > 0 {
        TickInput::LEFT
    } else {
        TickInput::RIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::IVec2;

    fn quiet_state() -> GameState {
        let tuning = Tuning {
            spawn_one_in: 0,
            ..Tuning::default()
        };
        GameState::new(5, tuning, 0)
    }

    #[test]
    fn test_idle_when_clear_and_centered() {
        let state = quiet_state();
        assert_eq!(autopilot(&state), TickInput::NONE);
    }

    #[test]
    fn test_returns_to_center() {
        let mut state = quiet_state();
        state.player_x = 0;
        assert_eq!(autopilot(&state), TickInput::RIGHT);
        state.player_x = 750;
        assert_eq!(autopilot(&state), TickInput::LEFT);
    }

    #[test]
    fn test_dodges_obstacle_overhead() {
        let mut state = quiet_state();
        // Threat slightly right of the ship's center: go left
        state.push_obstacle(IVec2::new(390, 300), 5);
        assert_eq!(autopilot(&state), TickInput::LEFT);
    }

    #[test]
    fn test_avoids_wall_when_dodging() {
        let mut state = quiet_state();
        state.player_x = 0;
        state.push_obstacle(IVec2::new(10, 300), 5);
        assert_eq!(autopilot(&state), TickInput::RIGHT);
    }

    #[test]
    fn test_nothing_to_do_after_game_over() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        assert_eq!(autopilot(&state), TickInput::NONE);
    }
}
