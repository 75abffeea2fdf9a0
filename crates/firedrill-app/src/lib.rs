//! FIREDRILL console application.
//!
//! Wires the simulation crates together: a 60 Hz training loop thread, a
//! shared snapshot slot for polling, and the safety advisor chat.

pub mod state;
pub mod training_loop;

pub use firedrill_core as core;
