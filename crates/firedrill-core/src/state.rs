//! Training snapshot: the complete visible state produced after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::TrainingPhase;
use crate::events::FeedbackEvent;
use crate::types::SimTime;

/// Complete per-tick state for the host to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingSnapshot {
    pub time: SimTime,
    pub phase: TrainingPhase,
    /// Remaining fire intensity in [0, 100]; 0 means extinguished.
    pub fire_health: f32,
    pub operator: OperatorView,
    pub flames: Vec<FlameView>,
    pub droplets: Vec<DropletView>,
    pub steam: Vec<SteamView>,
    /// Events emitted during this tick.
    pub feedback: Vec<FeedbackEvent>,
}

/// Operator input state as the engine sees it (post-clamp).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OperatorView {
    pub aim: f32,
    pub trigger_held: bool,
    /// Progress of the squeeze dwell window toward the sweep step, [0, 1].
    pub dwell_progress: f32,
}

/// A visible flame particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlameView {
    pub position: Vec2,
    pub radius: f32,
    /// Remaining-life fraction, doubles as draw alpha.
    pub life: f32,
    /// Hue in degrees.
    pub hue: f32,
}

/// A visible agent droplet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DropletView {
    pub position: Vec2,
    pub radius: f32,
    pub life: f32,
}

/// A visible steam puff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteamView {
    pub position: Vec2,
    pub radius: f32,
    pub life: f32,
}
