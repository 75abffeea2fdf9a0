//! Structural simulation constants.
//!
//! Policy knobs (spawn rates, radii, suppression rates) live in
//! [`crate::tuning::Tuning`], not here.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;
