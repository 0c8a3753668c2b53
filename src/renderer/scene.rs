//! Frame composition: what gets drawn in each phase

use glam::IVec2;

use super::{Rect, Renderer, Sprite, TextStyle};
use crate::sim::{GamePhase, GameState};

pub const RESTART_LABEL: &str = "Respawn";
const BUTTON_WIDTH: i32 = 150;
const BUTTON_HEIGHT: i32 = 40;

/// Where the restart control sits (centered, below the stats)
pub fn restart_button_rect(state: &GameState) -> Rect {
    let t = &state.tuning;
    Rect::new(
        IVec2::new(t.field_width / 2 - BUTTON_WIDTH / 2, t.field_height / 2 + 80),
        IVec2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    )
}

/// Issue every draw call for the current frame. Never mutates the game.
pub fn draw_frame(state: &GameState, renderer: &mut impl Renderer) {
    match state.phase {
        GamePhase::Playing => draw_playing(state, renderer),
        GamePhase::GameOver => draw_game_over(state, renderer),
    }
}

fn draw_playing(state: &GameState, renderer: &mut impl Renderer) {
    let t = &state.tuning;

    renderer.draw_sprite(Sprite::Ship, state.player_hitbox(), 0.0);

    for obstacle in &state.obstacles {
        renderer.draw_sprite(
            Sprite::Meteorite(obstacle.texture),
            obstacle.hitbox(t.block_size),
            obstacle.rotation,
        );
    }

    renderer.draw_text(
        &format!("Score: {}", state.score),
        IVec2::new(10, 30),
        TextStyle::Hud,
    );
    renderer.draw_text(
        &format!("Highscore: {}", state.high_score),
        IVec2::new(t.field_width - 160, 30),
        TextStyle::Hud,
    );
}

fn draw_game_over(state: &GameState, renderer: &mut impl Renderer) {
    let t = &state.tuning;
    let left = t.field_width / 3;

    renderer.draw_text("GAME OVER", IVec2::new(left, t.field_height / 3), TextStyle::Banner);
    renderer.draw_text(
        &format!("Score: {}", state.score),
        IVec2::new(left, t.field_height / 2),
        TextStyle::Stats,
    );
    renderer.draw_text(
        &format!("Highscore: {}", state.high_score),
        IVec2::new(left, t.field_height / 2 + 40),
        TextStyle::Stats,
    );
    renderer.draw_button(RESTART_LABEL, restart_button_rect(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingRenderer};
    use crate::tuning::Tuning;

    #[test]
    fn test_playing_frame() {
        let mut state = GameState::new(3, Tuning::default(), 9);
        state.score = 4;
        state.push_obstacle(IVec2::new(100, 40), 5);
        state.obstacles[0].rotation = 0.25;
        state.obstacles[0].texture = 2;

        let mut r = RecordingRenderer::default();
        draw_frame(&state, &mut r);

        assert_eq!(
            r.commands,
            vec![
                DrawCommand::Sprite {
                    sprite: Sprite::Ship,
                    rect: Rect::square(IVec2::new(375, 520), 50),
                    rotation: 0.0,
                },
                DrawCommand::Sprite {
                    sprite: Sprite::Meteorite(2),
                    rect: Rect::square(IVec2::new(100, 40), 50),
                    rotation: 0.25,
                },
                DrawCommand::Text {
                    text: "Score: 4".into(),
                    pos: IVec2::new(10, 30),
                    style: TextStyle::Hud,
                },
                DrawCommand::Text {
                    text: "Highscore: 9".into(),
                    pos: IVec2::new(640, 30),
                    style: TextStyle::Hud,
                },
            ]
        );
        assert!(!r.button_visible());
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::new(3, Tuning::default(), 20);
        state.score = 11;
        state.phase = GamePhase::GameOver;

        let mut r = RecordingRenderer::default();
        draw_frame(&state, &mut r);

        assert_eq!(r.texts(), vec!["GAME OVER", "Score: 11", "Highscore: 20"]);
        assert!(r.button_visible());
        assert_eq!(
            restart_button_rect(&state),
            Rect::new(IVec2::new(325, 380), IVec2::new(150, 40))
        );
        assert!(r.sprites().is_empty());
    }

    #[test]
    fn test_drawing_is_side_effect_free() {
        let mut state = GameState::new(3, Tuning::default(), 0);
        state.push_obstacle(IVec2::new(100, 40), 5);
        let before = state.obstacles.clone();

        let mut r = RecordingRenderer::default();
        for _ in 0..5 {
            draw_frame(&state, &mut r);
        }
        assert_eq!(state.obstacles, before);
    }
}
