//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Particle position in scene pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Particle velocity in scene pixels per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Remaining-life fraction: 1.0 at spawn, retired at <= 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Life {
    pub remaining: f32,
    /// Fraction lost per tick.
    pub decay_per_tick: f32,
}

/// Visual radius. Negative rate for shrinking kinds (flames).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Radius {
    pub size: f32,
    pub rate_per_tick: f32,
}

/// Marks a flame particle. Purely cosmetic; its population reads fire
/// health but never writes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flame {
    /// Hue in degrees for the orange/yellow gradient.
    pub hue: f32,
}

/// Marks an extinguishing-agent droplet, the only particle kind that
/// participates in suppression.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Droplet;

/// Marks a cosmetic steam puff spawned at a suppression hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Steam;
