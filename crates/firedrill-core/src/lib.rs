//! Core types and definitions for the FIREDRILL trainer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, and tuning. It has no
//! dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
