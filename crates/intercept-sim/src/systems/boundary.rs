//! Map boundary handling for the threat.
//!
//! Under `BoundaryPolicy::Clamp` the threat is held inside the map; under
//! `BoundaryPolicy::Escape` it may leave, and far enough out the run ends.
//! The responder is never constrained.

use hecs::World;

use intercept_core::config::EngagementRules;
use intercept_core::constants::{CLAMP_MARGIN_KM, ESCAPE_OVERRUN_KM};
use intercept_core::enums::{BoundaryPolicy, Outcome, SessionPhase};
use intercept_core::events::SessionEvent;
use intercept_core::types::Position;

use crate::engagement::EngagementState;
use crate::world_setup::ActorHandles;

/// Clamp the threat to the map inset by `CLAMP_MARGIN_KM`. Heading is kept.
pub fn clamp_threat(world: &mut World, actors: &ActorHandles, rules: &EngagementRules) {
    if rules.boundary != BoundaryPolicy::Clamp {
        return;
    }
    if let Ok(pos) = world.query_one_mut::<&mut Position>(actors.threat) {
        *pos = rules.map.clamp(*pos, CLAMP_MARGIN_KM);
    }
}

/// End the run once the threat is more than `ESCAPE_OVERRUN_KM` outside the map.
pub fn check_escape(
    world: &World,
    actors: &ActorHandles,
    rules: &EngagementRules,
    state: &mut EngagementState,
    events: &mut Vec<SessionEvent>,
) {
    if rules.boundary != BoundaryPolicy::Escape || state.outcome.is_some() {
        return;
    }
    if !super::is_deployed(world, actors.threat) {
        return;
    }
    let Some(pos) = super::position_of(world, actors.threat) else {
        return;
    };
    if !rules.map.is_beyond(&pos, ESCAPE_OVERRUN_KM) {
        return;
    }

    log::info!("threat escaped at ({:.2}, {:.2})", pos.x, pos.y);
    state.outcome = Some(Outcome::Escaped);
    events.push(SessionEvent::Escaped { position: pos });
    state.transition(SessionPhase::Finished(Outcome::Escaped), events);
}
