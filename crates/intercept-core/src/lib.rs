//! Core types and definitions for the interception simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, configuration, commands, snapshots, events,
//! and constants. It has no dependency on any runtime or renderer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
