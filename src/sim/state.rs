//! Game state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Hitbox;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship is steerable, obstacles fall
    Playing,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Something that happened during a tick that the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle left the bottom of the field
    ObstacleCleared { score: u32 },
    /// Score reached a multiple of the point-cue interval
    PointMilestone { score: u32 },
    /// The stored best was beaten for the first time this life
    NewHighScore { high_score: u32 },
    /// Ship collided; the run is over
    PlayerHit { score: u32, high_score: u32 },
}

/// A falling meteorite
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: IVec2,
    /// Pixels per tick, fixed at spawn
    pub fall_speed: i32,
    /// Cosmetic spin (radians)
    pub rotation: f32,
    /// Meteorite texture index, fixed at spawn
    pub texture: usize,
}

impl Obstacle {
    pub fn new(id: u32, pos: IVec2, fall_speed: i32, texture: usize) -> Self {
        Self {
            id,
            pos,
            fall_speed,
            rotation: 0.0,
            texture,
        }
    }

    /// Advance one tick
    pub fn fall(&mut self, spin: f32) {
        self.pos.y += self.fall_speed;
        self.rotation += spin;
    }

    pub fn hitbox(&self, block_size: i32) -> Hitbox {
        Hitbox::square(self.pos, block_size)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Ship's left edge
    pub player_x: i32,
    /// Obstacles dodged this life
    pub score: u32,
    /// Best score ever, seeded from storage
    pub high_score: u32,
    /// High score at the start of the current life
    pub(crate) life_start_high_score: u32,
    pub phase: GamePhase,
    /// Falling obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and stored best score
    pub fn new(seed: u64, tuning: Tuning, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player_x: tuning.center_player_x(),
            tuning,
            score: 0,
            high_score,
            life_start_high_score: high_score,
            phase: GamePhase::Playing,
            obstacles: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Place an obstacle at an exact position (host scripting and tests)
    pub fn push_obstacle(&mut self, pos: IVec2, fall_speed: i32) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle::new(id, pos, fall_speed, 0));
        id
    }

    pub fn player_hitbox(&self) -> Hitbox {
        self.tuning.player_hitbox(self.player_x)
    }

    /// Start a fresh life. Only valid from GameOver; returns whether it happened.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.player_x = self.tuning.center_player_x();
        self.score = 0;
        self.obstacles.clear();
        self.life_start_high_score = self.high_score;
        self.phase = GamePhase::Playing;
        true
    }
}
