//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ActorKind;

/// Identifies which of the two actors an entity is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    pub kind: ActorKind,
}

/// Direction of travel in radians (from +x toward +y). Not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Constant cruise speed, fixed at reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    /// As configured.
    pub kmh: f64,
    /// `kmh / 3600`, the value used for integration.
    pub km_per_sec: f64,
}

/// Distance-traveled accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Odometer {
    pub distance_km: f64,
}

/// Whether the actor has been placed on the map yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub active: bool,
}

/// Countdown to the next random heading change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManeuverTimer {
    /// Seconds since the last heading change.
    pub elapsed_secs: f64,
    /// Seconds between the last heading change and the next one.
    pub interval_secs: f64,
}

/// Marks the randomly maneuvering actor that spawns at the edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Threat;

/// Marks the actor anchored at map center that reacts to the threat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Responder;
