//! Engagement zone test.
//!
//! The zone is a circle of the configured radius centred on the responder.
//! A threat exactly on the circle counts as inside.

use hecs::World;

use intercept_core::config::EngagementRules;
use intercept_core::enums::{DetectionPolicy, SessionPhase};
use intercept_core::events::SessionEvent;

use crate::engagement::EngagementState;
use crate::world_setup::ActorHandles;

pub fn in_zone(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}

/// Update detection and the engaged flag, and move the phase between
/// approaching and engaged accordingly.
pub fn run(
    world: &World,
    actors: &ActorHandles,
    zone_radius_km: f64,
    rules: &EngagementRules,
    state: &mut EngagementState,
    events: &mut Vec<SessionEvent>,
) {
    let Some(distance) = super::separation(world, actors) else {
        return;
    };
    let inside = in_zone(distance, zone_radius_km);
    state.detected |= inside;

    let engaged = match rules.detection {
        DetectionPolicy::Latched => state.detected,
        DetectionPolicy::Continuous => inside,
    };

    if engaged && !state.engaged {
        log::info!("threat detected at {distance:.3} km");
        events.push(SessionEvent::ThreatDetected {
            distance_km: distance,
        });
    } else if !engaged && state.engaged {
        log::info!("threat left the zone at {distance:.3} km");
        events.push(SessionEvent::ThreatLost {
            distance_km: distance,
        });
    }
    state.engaged = engaged;

    let phase = if engaged {
        rules.role.engaged_phase()
    } else {
        SessionPhase::Approaching
    };
    state.transition(phase, events);
}
