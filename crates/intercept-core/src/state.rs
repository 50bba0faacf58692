//! Session snapshot: the complete visible state handed to a presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{MapBounds, Position, SimTime};

/// Read-only projection of a session after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub time: SimTime,
    pub time_elapsed_hours: f64,
    pub phase: SessionPhase,
    /// Set once the run is decided (already `Intercepted` while exploding).
    pub outcome: Option<Outcome>,
    pub paused: bool,
    pub role: RoleAssignment,
    pub map: MapBounds,
    pub interceptor: ActorView,
    pub target: ActorView,
    /// Separation between the actors (km); 0 until the threat is placed.
    pub current_distance_km: f64,
    pub zone: ZoneView,
    /// Whether the threat has ever been inside the zone this run.
    pub detected: bool,
    /// Explosion animation progress, 0..=1.
    pub explosion_progress: f64,
    /// Where the explosion is drawn (the responder's position).
    pub explosion_position: Option<Position>,
}

/// One actor as seen by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub position: Position,
    /// Radians, from +x toward +y.
    pub heading: f64,
    pub speed_kmh: f64,
    pub distance_traveled_km: f64,
    /// False while the threat waits to be spawned.
    pub active: bool,
}

/// The engagement zone circle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneView {
    pub center: Position,
    pub radius_km: f64,
}

impl SessionView {
    pub fn actor(&self, kind: ActorKind) -> &ActorView {
        match kind {
            ActorKind::Interceptor => &self.interceptor,
            ActorKind::Target => &self.target,
        }
    }
}
