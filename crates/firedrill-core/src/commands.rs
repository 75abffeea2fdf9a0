//! Operator commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Discrete actions that don't match the current phase are ignored.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Procedure steps ---
    /// Begin training (Intro -> Inspect).
    Start,
    /// Confirm the pressure gauge reads green (Inspect -> Pull).
    ConfirmGauge,
    /// Pull the safety pin (Pull -> Aim).
    PullPin,
    /// Confirm the nozzle points at the fire base (Aim -> Squeeze).
    ConfirmAim,

    // --- Continuous inputs ---
    /// Update the aim offset, [-1, 1] from scene center.
    SetAim { value: f32 },
    /// Press or release the discharge trigger.
    SetTrigger { held: bool },

    // --- Run control ---
    /// Abort the run: clear all particles, restore full fire health,
    /// and return to Intro.
    Reset,
}
