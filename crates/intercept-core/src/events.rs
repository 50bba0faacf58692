//! Events emitted by the engagement systems for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Engagement state machine moved to a new phase.
    PhaseChanged { from: SessionPhase, to: SessionPhase },
    /// Threat placed beyond a map edge.
    ThreatSpawned {
        actor: ActorKind,
        position: Position,
        heading: f64,
        edge: MapEdge,
    },
    /// Random maneuver applied to the threat.
    HeadingChanged {
        actor: ActorKind,
        heading: f64,
        turn: f64,
    },
    /// Threat entered the engagement zone.
    ThreatDetected { distance_km: f64 },
    /// Threat left the engagement zone (continuous detection only).
    ThreatLost { distance_km: f64 },
    /// Separation fell below the intercept distance.
    Intercepted { position: Position, distance_km: f64 },
    /// Threat left the map for good.
    Escaped { position: Position },
}
