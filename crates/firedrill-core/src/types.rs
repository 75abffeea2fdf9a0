//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// The two continuous operator inputs sampled by the engine every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorInput {
    /// Target offset from scene center, normalized to [-1, 1].
    pub aim: f32,
    /// Whether the discharge trigger is actively held.
    pub trigger_held: bool,
}

impl OperatorInput {
    /// Update the aim offset. Values are clamped to [-1, 1];
    /// non-finite values recenter the aim.
    pub fn set_aim(&mut self, value: f32) {
        self.aim = if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }
}
