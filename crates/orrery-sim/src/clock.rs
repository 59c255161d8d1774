//! Simulation clock for frame-driven playback

use orrery_core::constants::DEFAULT_SPEED_FACTOR;
use serde::{Deserialize, Serialize};

/// Simulated-time clock with variable rate playback
///
/// The host animation loop owns the clock and ticks it once per frame; the
/// motion engine only reads the current value. Time is a unitless scalar,
/// starts at zero and may run backwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Current simulated time
    current: f64,
    /// Simulated time advanced per frame-delta unit
    speed_factor: f64,
    /// Is the clock paused?
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            speed_factor: DEFAULT_SPEED_FACTOR,
            paused: false,
        }
    }

    /// Create with a specific speed factor
    pub fn with_speed_factor(speed_factor: f64) -> Self {
        let mut clock = Self::new();
        clock.set_speed_factor(speed_factor);
        clock
    }

    /// Get current simulated time
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Set absolute simulated time
    pub fn set_time(&mut self, time: f64) {
        self.current = time;
    }

    /// Get current speed factor
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Set speed factor (simulated time per frame-delta unit)
    pub fn set_speed_factor(&mut self, speed_factor: f64) {
        self.speed_factor = speed_factor.clamp(-1e9, 1e9); // Allow reverse time
    }

    /// Pause the clock
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Is paused?
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance by a frame delta, scaled by the speed factor
    /// Returns the new simulated time
    pub fn tick(&mut self, frame_delta: f64) -> f64 {
        if self.paused {
            return self.current;
        }

        self.current += frame_delta * self.speed_factor;
        self.current
    }

    /// Jump forward/backward by a simulated-time delta, ignoring the rate
    pub fn jump(&mut self, delta: f64) {
        self.current += delta;
    }

    /// Rewind to time zero, as when a model is switched or reloaded
    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset speed factors
pub mod rates {
    /// One simulated unit per frame unit
    pub const UNIT: f64 = 1.0;
    /// Rate used by the concentric-sphere demos
    pub const SPHERE_DEMO: f64 = 0.005;
    /// Rate used by the axial-spin demos
    pub const SPIN_DEMO: f64 = 2.0;
}
