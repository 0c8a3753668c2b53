//! Rendering interface
//!
//! The game issues draw calls in the fixed 800×600 logical space; scaling to
//! the real window is the host's job.

pub mod recording;
pub mod scene;

use glam::IVec2;

pub use recording::{DrawCommand, RecordingRenderer};
pub use scene::{draw_frame, restart_button_rect};

/// Rectangle in logical field coordinates
pub type Rect = crate::sim::Hitbox;

/// Which image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    /// Index into the host's meteorite texture set
    Meteorite(usize),
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// In-game score overlay (white, 20pt)
    Hud,
    /// Game over banner (red, bold, 50pt)
    Banner,
    /// Game over statistics (white, 30pt)
    Stats,
}

impl TextStyle {
    pub fn point_size(&self) -> u32 {
        match self {
            TextStyle::Hud => 20,
            TextStyle::Banner => 50,
            TextStyle::Stats => 30,
        }
    }
}

/// Host-side drawing surface
pub trait Renderer {
    /// Draw an image stretched to `rect`, rotated by `rotation` radians around its center
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect, rotation: f32);
    /// Draw text with its baseline starting at `pos`
    fn draw_text(&mut self, text: &str, pos: IVec2, style: TextStyle);
    /// Show the clickable restart control
    fn draw_button(&mut self, label: &str, rect: Rect);
}
