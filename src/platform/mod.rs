//! Platform abstraction layer
//!
//! Host-side helpers that sit between the window system and the game:
//! - Input: live set of held steering keys
//! - Time: fixed-rate tick scheduling from variable frame times

pub mod input;
pub mod time;

pub use input::HeldKeys;
pub use time::FixedTimestep;
