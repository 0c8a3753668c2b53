//! A renderer that writes draw calls to a list instead of a screen

use glam::IVec2;

use super::{Rect, Renderer, Sprite, TextStyle};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        rect: Rect,
        rotation: f32,
    },
    Text {
        text: String,
        pos: IVec2,
        style: TextStyle,
    },
    Button {
        label: String,
        rect: Rect,
    },
}

/// Headless renderer (demo host, tests)
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Start a new frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<Sprite> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    pub fn button_visible(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Button { .. }))
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect, rotation: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            rect,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }

    fn draw_button(&mut self, label: &str, rect: Rect) {
        self.commands.push(DrawCommand::Button {
            label: label.to_string(),
            rect,
        });
    }
}
