//! Snapshot system: queries the world and builds a complete TrainingSnapshot.
//!
//! This system is read-only; it never modifies the world. The host gets
//! this copy; engine-internal collections are never exposed for mutation.

use hecs::World;

use firedrill_core::components::{Droplet, Flame, Life, Position, Radius, Steam};
use firedrill_core::enums::TrainingPhase;
use firedrill_core::events::FeedbackEvent;
use firedrill_core::state::{DropletView, FlameView, OperatorView, SteamView, TrainingSnapshot};
use firedrill_core::types::SimTime;

/// Build a complete TrainingSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: TrainingPhase,
    fire_health: f32,
    operator: OperatorView,
    feedback: Vec<FeedbackEvent>,
) -> TrainingSnapshot {
    TrainingSnapshot {
        time: *time,
        phase,
        fire_health,
        operator,
        flames: build_flames(world),
        droplets: build_droplets(world),
        steam: build_steam(world),
        feedback,
    }
}

fn build_flames(world: &World) -> Vec<FlameView> {
    world
        .query::<(&Position, &Radius, &Life, &Flame)>()
        .iter()
        .map(|(_, (pos, radius, life, flame))| FlameView {
            position: pos.0,
            radius: radius.size,
            life: life.remaining.max(0.0),
            hue: flame.hue,
        })
        .collect()
}

fn build_droplets(world: &World) -> Vec<DropletView> {
    world
        .query::<(&Position, &Radius, &Life, &Droplet)>()
        .iter()
        .map(|(_, (pos, radius, life, _))| DropletView {
            position: pos.0,
            radius: radius.size,
            life: life.remaining.max(0.0),
        })
        .collect()
}

fn build_steam(world: &World) -> Vec<SteamView> {
    world
        .query::<(&Position, &Radius, &Life, &Steam)>()
        .iter()
        .map(|(_, (pos, radius, life, _))| SteamView {
            position: pos.0,
            radius: radius.size,
            life: life.remaining.max(0.0),
        })
        .collect()
}
