//! Host-facing game loop
//!
//! Owns the simulation state and the two collaborators with side effects
//! (score storage and sound). The host calls `on_tick` at the fixed rate,
//! `on_draw` whenever it wants a frame and `on_restart` when the respawn
//! control is clicked. All three take the loop by reference, so they can
//! never overlap.

use crate::audio::{SoundCue, SoundSink};
use crate::highscores::ScoreStore;
use crate::renderer::{self, Rect, Renderer};
use crate::settings::SettingsError;
use crate::sim::{self, GameEvent, GamePhase, GameState, InputSource};
use crate::tuning::Tuning;

pub struct GameLoop<S: ScoreStore, A: SoundSink> {
    state: GameState,
    store: S,
    sound: A,
}

impl<S: ScoreStore, A: SoundSink> GameLoop<S, A> {
    /// Start a run, seeding the high score from `store`.
    ///
    /// Fails if `tuning` would leave the ship or blocks no room on the field.
    pub fn new(seed: u64, tuning: Tuning, mut store: S, sound: A) -> Result<Self, SettingsError> {
        if let Some(problem) = tuning.problem() {
            return Err(SettingsError::Invalid(problem));
        }
        let high_score = store.load();
        log::info!("New game (seed {}, best {})", seed, high_score);
        Ok(Self {
            state: GameState::new(seed, tuning, high_score),
            store,
            sound,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for host scripting and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sound(&self) -> &A {
        &self.sound
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Advance one fixed step and react to what happened
    pub fn on_tick(&mut self, input: &impl InputSource) {
        for event in sim::tick(&mut self.state, input) {
            self.dispatch(event);
        }
    }

    /// Draw the current frame
    pub fn on_draw(&self, renderer: &mut impl Renderer) {
        renderer::draw_frame(&self.state, renderer);
    }

    /// Respawn after a game over. Ignored while playing.
    pub fn on_restart(&mut self) -> bool {
        let restarted = self.state.restart();
        if restarted {
            log::info!("Respawned (best {})", self.state.high_score);
        } else {
            log::debug!("Restart ignored while playing");
        }
        restarted
    }

    /// Where the respawn control is, if it is showing
    pub fn restart_button(&self) -> Option<Rect> {
        (self.state.phase == GamePhase::GameOver)
            .then(|| renderer::restart_button_rect(&self.state))
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::PointMilestone { score } => {
                log::debug!("Milestone reached: {}", score);
                self.sound.play(SoundCue::Point);
            }
            GameEvent::PlayerHit { high_score, .. } => {
                self.sound.play(SoundCue::Death);
                self.store.save(high_score);
            }
            GameEvent::ObstacleCleared { .. } | GameEvent::NewHighScore { .. } => {}
        }
    }
}
