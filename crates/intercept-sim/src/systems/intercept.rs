//! Interception test and explosion timing.

use hecs::World;

use intercept_core::constants::{EXPLOSION_DURATION_SECS, INTERCEPT_DISTANCE_KM};
use intercept_core::enums::{Outcome, SessionPhase};
use intercept_core::events::SessionEvent;

use crate::engagement::EngagementState;
use crate::world_setup::ActorHandles;

/// Declare interception once the actors are closer than `INTERCEPT_DISTANCE_KM`.
pub fn check(
    world: &World,
    actors: &ActorHandles,
    state: &mut EngagementState,
    events: &mut Vec<SessionEvent>,
) {
    if state.outcome.is_some() {
        return;
    }
    let Some(distance) = super::separation(world, actors) else {
        return;
    };
    if distance >= INTERCEPT_DISTANCE_KM {
        return;
    }
    let Some(position) = super::position_of(world, actors.responder) else {
        return;
    };

    log::info!(
        "intercepted at ({:.2}, {:.2}), separation {:.4} km",
        position.x,
        position.y,
        distance
    );
    state.outcome = Some(Outcome::Intercepted);
    state.explosion_elapsed_secs = 0.0;
    state.intercept_position = Some(position);
    events.push(SessionEvent::Intercepted {
        position,
        distance_km: distance,
    });
    state.transition(SessionPhase::Exploding, events);
}

/// Run the explosion clock; finish the run when it expires.
pub fn advance_explosion(state: &mut EngagementState, dt_secs: f64, events: &mut Vec<SessionEvent>) {
    if state.phase != SessionPhase::Exploding {
        return;
    }
    state.explosion_elapsed_secs += dt_secs;
    if state.explosion_elapsed_secs >= EXPLOSION_DURATION_SECS {
        state.transition(SessionPhase::Finished(Outcome::Intercepted), events);
    }
}
