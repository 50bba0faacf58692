//! Simulation engine for the interception simulator.
//!
//! Owns the hecs world holding both actors, runs the engagement systems
//! once per tick, and produces `SessionView` snapshots for a presentation layer.

pub mod engagement;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use intercept_core as core;
pub use engine::{SessionSettings, SimulationSession};
