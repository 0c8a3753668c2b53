//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::Hitbox;
pub use input::{Direction, InputSource, TickInput};
pub use state::{GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{spawn_obstacle, tick};
