//! Headless driver for the interception simulator.
//!
//! Wires the simulation crates to a command line: settings resolution,
//! a paced game-loop thread for realtime runs, and a fast headless runner.

pub mod cli;
pub mod game_loop;
pub mod runner;
pub mod settings;
pub mod state;

pub use intercept_core as core;
