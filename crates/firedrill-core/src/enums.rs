//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The discrete training step currently active.
///
/// Follows the PASS extinguisher sequence: inspect the gauge, Pull the pin,
/// Aim the nozzle, Squeeze the handle, Sweep across the fire base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingPhase {
    /// Title screen, awaiting the start action.
    #[default]
    Intro,
    /// Check that the pressure gauge reads in the green zone.
    Inspect,
    /// Pull the safety pin.
    Pull,
    /// Aim the nozzle at the base of the fire.
    Aim,
    /// Squeeze the handle to begin discharge.
    Squeeze,
    /// Sweep the spray side to side across the fire base.
    Sweep,
    /// Fire fully suppressed; the run is complete.
    Success,
}

impl TrainingPhase {
    /// Whether the trigger input is meaningful: agent droplets only
    /// discharge in the squeeze/sweep steps.
    pub fn is_discharge(self) -> bool {
        matches!(self, Self::Squeeze | Self::Sweep)
    }

    /// Terminal phase: simulation state is frozen.
    pub fn is_terminal(self) -> bool {
        self == Self::Success
    }
}
