//! Fixed-rate tick scheduling
//!
//! Frame times vary; the simulation does not. Elapsed time is banked in an
//! accumulator and paid out in whole ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Converts variable frame deltas into a count of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Bank `dt` seconds and return how many ticks to run now.
    ///
    /// Long stalls are capped at `max_substeps` and the excess is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        // One step of headroom past the cap keeps float error from losing a tick
        let max_dt = self.step * (self.max_substeps as f32 + 1.0);
        let dt = dt.clamp(0.0, max_dt);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }
}
