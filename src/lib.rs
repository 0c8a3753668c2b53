//! SpaceShip Cruiser - dodge the falling meteorites
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, obstacles, collisions, phase)
//! - `game`: Host-facing loop that wires the simulation to its collaborators
//! - `renderer`: Draw-call interface in logical field coordinates
//! - `platform`: Input and fixed timestep helpers
//! - `highscores`: Single-integer high score persistence
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, LogBackend, SoundCue, SoundSink};
pub use game::GameLoop;
pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore, StorageError};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical field dimensions (all draw calls use this space)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Ship defaults
    pub const PLAYER_SIZE: i32 = 50;
    pub const PLAYER_STEP: i32 = 7;
    /// Gap between the ship's bottom edge and the bottom of the field
    pub const PLAYER_BOTTOM_MARGIN: i32 = 30;

    /// Obstacle defaults
    pub const BLOCK_SIZE: i32 = 50;
    pub const BASE_FALL_SPEED: i32 = 5;
    /// Every this many points adds one pixel/tick to newly spawned obstacles
    pub const SPEED_SCORE_DIVISOR: u32 = 10;
    /// One spawn in this many ticks on average
    pub const SPAWN_ONE_IN: u32 = 30;
    /// Cosmetic spin per tick (radians)
    pub const SPIN_PER_TICK: f32 = 0.05;
    /// Number of meteorite textures the host provides
    pub const METEORITE_TEXTURES: usize = 4;

    /// Point cue fires whenever the score hits a multiple of this
    pub const POINT_CUE_EVERY: u32 = 50;
}
