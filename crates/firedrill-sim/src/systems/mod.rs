//! Per-tick simulation systems, run in a fixed order by the engine.
//!
//! Later stages consume the populations produced by earlier ones, so the
//! ordering in `TrainerEngine::run_systems` is load-bearing.

pub mod cleanup;
pub mod flame_spawn;
pub mod movement;
pub mod nozzle;
pub mod snapshot;
pub mod suppression;
