//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TrainingPhase;

/// Feedback events drained into each snapshot for the host layer
/// (UI cues and haptic motor patterns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// The state machine advanced to a new phase.
    PhaseAdvanced { phase: TrainingPhase },
    /// Drive the haptic motor: alternating on/off durations in milliseconds.
    Haptic { pattern: Vec<u32> },
    /// The fire was fully suppressed this tick. Emitted at most once per run.
    Extinguished,
}

impl FeedbackEvent {
    /// Short buzz acknowledging a discrete procedure action.
    pub fn action_buzz() -> Self {
        Self::Haptic { pattern: vec![30] }
    }

    /// Firmer buzz for the pin pull.
    pub fn pin_buzz() -> Self {
        Self::Haptic { pattern: vec![50] }
    }

    /// Light recoil pulse while the trigger is held.
    pub fn recoil_pulse() -> Self {
        Self::Haptic { pattern: vec![20] }
    }

    /// Celebration pattern on success.
    pub fn success_pattern() -> Self {
        Self::Haptic {
            pattern: vec![100, 50, 100, 50, 200],
        }
    }
}
