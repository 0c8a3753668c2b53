//! Sound cues
//!
//! The game only ever asks for two sounds. Playback itself belongs to the
//! host; `AudioManager` applies the volume settings and hands the cue to a
//! backend. Everything here is fire-and-forget.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Score hit a milestone
    Point,
    /// Ship destroyed
    Death,
}

impl SoundCue {
    /// Asset path the desktop build plays for this cue
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundCue::Point => "assets/sounds/points.wav",
            SoundCue::Death => "assets/sounds/death.wav",
        }
    }
}

/// Something that can be asked to play a cue
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Host playback, called with the effective volume (0.0 - 1.0)
pub trait SoundBackend {
    fn play_at(&mut self, cue: SoundCue, volume: f32);
}

/// Backend for headless runs: logs each cue
#[derive(Debug, Default)]
pub struct LogBackend;

impl SoundBackend for LogBackend {
    fn play_at(&mut self, cue: SoundCue, volume: f32) {
        log::debug!("♪ {:?} ({}) at {:.2}", cue, cue.asset_path(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: SoundBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl<B: SoundBackend> SoundSink for AudioManager<B> {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play_at(cue, vol);
    }
}

/// Collects cues in order (tests)
#[derive(Debug, Default, Clone)]
pub struct CueLog {
    pub cues: Vec<SoundCue>,
}

impl SoundSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

impl SoundBackend for CueLog {
    fn play_at(&mut self, cue: SoundCue, _volume: f32) {
        self.cues.push(cue);
    }
}
