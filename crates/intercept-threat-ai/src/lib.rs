//! Threat behavior for the interception simulator.
//!
//! Pure functions for the randomly maneuvering actor: where it spawns,
//! when and how far it turns, and the random source both draw from.
//! No ECS dependency; operates on plain data.

pub mod maneuver;
pub mod random;
pub mod spawn;

pub use intercept_core as core;
pub use random::{ScriptedSource, SeededSource, UniformSource};
