//! Reactive motion of the responder.
//!
//! Pursuit: the interceptor steers straight at the target (pure pursuit).
//! Evasion: the target runs straight away from the interceptor.

use hecs::World;

use intercept_core::config::EngagementRules;
use intercept_core::constants::MIN_REACTIVE_DISTANCE_KM;
use intercept_core::enums::RoleAssignment;

use super::movement;
use crate::world_setup::ActorHandles;

pub fn run(world: &mut World, actors: &ActorHandles, rules: &EngagementRules, dt_secs: f64) {
    let (Some(responder), Some(threat)) = (
        super::position_of(world, actors.responder),
        super::position_of(world, actors.threat),
    ) else {
        return;
    };

    // Too close to define a direction; hold.
    if responder.range_to(&threat) < MIN_REACTIVE_DISTANCE_KM {
        return;
    }
    let Some(toward) = responder.direction_to(&threat) else {
        return;
    };

    let direction = match rules.role {
        RoleAssignment::Pursuit => toward,
        RoleAssignment::Evasion => -toward,
    };
    movement::step_along(world, actors.responder, direction, dt_secs);
}
