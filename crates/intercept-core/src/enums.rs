//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The two actors of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Interceptor,
    Target,
}

/// Which actor maneuvers randomly (the threat) and which one reacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    /// The target wanders in from the edge; the interceptor chases it once detected.
    #[default]
    Pursuit,
    /// The interceptor wanders in from the edge; the target flees once it is close.
    Evasion,
}

/// Orientation of the map's y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YAxis {
    /// Screen convention: y grows toward the bottom edge.
    #[default]
    Down,
    /// Cartesian convention: y grows toward the top edge.
    Up,
}

/// What happens when the threat reaches the map boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Keep the threat inside the map, inset by a small margin.
    #[default]
    Clamp,
    /// Let the threat leave; far enough outside, the run ends as escaped.
    Escape,
}

/// How detection in the engagement zone drives reactive motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionPolicy {
    /// Once detected, the reactive actor keeps reacting for the rest of the run.
    #[default]
    Latched,
    /// The reactive actor only reacts while the threat is inside the zone.
    Continuous,
}

/// Map edge a threat spawns beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Terminal result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Intercepted,
    Escaped,
}

/// Engagement state machine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Reset, nothing placed yet.
    #[default]
    Idle,
    /// Threat placed at the edge this tick.
    Spawning,
    /// Threat moving, not (or no longer) engaged.
    Approaching,
    /// Interceptor actively pursuing (pursuit role).
    Tracking,
    /// Target actively fleeing (evasion role).
    Evading,
    /// Interception confirmed, explosion animating.
    Exploding,
    /// Run over. Terminal until reset.
    Finished(Outcome),
}

impl ActorKind {
    pub fn other(self) -> ActorKind {
        match self {
            ActorKind::Interceptor => ActorKind::Target,
            ActorKind::Target => ActorKind::Interceptor,
        }
    }
}

impl RoleAssignment {
    /// The randomly maneuvering actor that spawns at the edge.
    pub fn threat(self) -> ActorKind {
        match self {
            RoleAssignment::Pursuit => ActorKind::Target,
            RoleAssignment::Evasion => ActorKind::Interceptor,
        }
    }

    /// The actor anchored at the map center that reacts to the threat.
    pub fn responder(self) -> ActorKind {
        self.threat().other()
    }

    /// Phase entered while the responder is reacting.
    pub fn engaged_phase(self) -> SessionPhase {
        match self {
            RoleAssignment::Pursuit => SessionPhase::Tracking,
            RoleAssignment::Evasion => SessionPhase::Evading,
        }
    }
}

impl SessionPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionPhase::Finished(_))
    }

    pub fn is_engaged(self) -> bool {
        matches!(self, SessionPhase::Tracking | SessionPhase::Evading)
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            SessionPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
