//! Data-driven game balance
//!
//! Every gameplay constant lives here so a settings file can override it.
//! Defaults come from [`crate::consts`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Hitbox;

/// Balance and geometry for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: i32,
    pub field_height: i32,
    pub player_size: i32,
    pub player_step: i32,
    pub player_bottom_margin: i32,
    pub block_size: i32,
    pub base_fall_speed: i32,
    pub speed_score_divisor: u32,
    /// Spawn chance is `1 / spawn_one_in` per tick; 0 disables spawning
    pub spawn_one_in: u32,
    pub spin_per_tick: f32,
    pub meteorite_textures: usize,
    pub point_cue_every: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_size: PLAYER_SIZE,
            player_step: PLAYER_STEP,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            block_size: BLOCK_SIZE,
            base_fall_speed: BASE_FALL_SPEED,
            speed_score_divisor: SPEED_SCORE_DIVISOR,
            spawn_one_in: SPAWN_ONE_IN,
            spin_per_tick: SPIN_PER_TICK,
            meteorite_textures: METEORITE_TEXTURES,
            point_cue_every: POINT_CUE_EVERY,
        }
    }
}

impl Tuning {
    /// Rightmost legal ship position
    pub fn max_player_x(&self) -> i32 {
        self.field_width - self.player_size
    }

    /// Ship start position (horizontally centered)
    pub fn center_player_x(&self) -> i32 {
        self.max_player_x() / 2
    }

    /// Top edge of the ship, fixed for the whole game
    pub fn player_y(&self) -> i32 {
        self.field_height - self.player_size - self.player_bottom_margin
    }

    pub fn player_hitbox(&self, player_x: i32) -> Hitbox {
        Hitbox::square(IVec2::new(player_x, self.player_y()), self.player_size)
    }

    /// Fall speed for an obstacle spawned at the given score
    pub fn fall_speed_for(&self, score: u32) -> i32 {
        let bonus = score.checked_div(self.speed_score_divisor).unwrap_or(0);
        self.base_fall_speed + bonus as i32
    }

    /// Whether reaching `score` should fire the point cue
    pub fn is_point_milestone(&self, score: u32) -> bool {
        score > 0 && self.point_cue_every > 0 && score.is_multiple_of(self.point_cue_every)
    }

    /// Returns a description of the first value that would break the game's
    /// invariants, if any
    pub fn problem(&self) -> Option<String> {
        if self.player_size <= 0 || self.block_size <= 0 {
            return Some("player_size and block_size must be positive".into());
        }
        if self.field_width < self.player_size || self.field_width < self.block_size {
            return Some(format!(
                "field_width {} is narrower than the ship or a block",
                self.field_width
            ));
        }
        if self.player_y() < 0 {
            return Some(format!(
                "field_height {} leaves no room for the ship",
                self.field_height
            ));
        }
        if self.player_step < 0 {
            return Some("player_step must not be negative".into());
        }
        if self.base_fall_speed <= 0 {
            return Some("base_fall_speed must be positive".into());
        }
        if self.meteorite_textures == 0 {
            return Some("meteorite_textures must be at least 1".into());
        }
        None
    }
}
