//! Simulation engine for the FIREDRILL trainer.
//!
//! Owns the hecs particle world, runs the per-tick system pipeline,
//! and produces TrainingSnapshots for the host.

pub mod engine;
pub mod systems;

pub use engine::{SimConfig, TrainerEngine};
pub use firedrill_core as core;
