//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the session state they
//! need. Per-run engagement state lives in `EngagementState`, actor state in
//! components.

pub mod boundary;
pub mod detection;
pub mod intercept;
pub mod maneuver;
pub mod movement;
pub mod reaction;
pub mod snapshot;
pub mod spawn;

use hecs::{Entity, World};

use intercept_core::types::Position;

use crate::world_setup::ActorHandles;

pub(crate) fn position_of(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}

/// Separation between the actors, or `None` while the threat is not deployed.
pub(crate) fn separation(world: &World, actors: &ActorHandles) -> Option<f64> {
    if !is_deployed(world, actors.threat) {
        return None;
    }
    let threat = position_of(world, actors.threat)?;
    let responder = position_of(world, actors.responder)?;
    Some(responder.range_to(&threat))
}

pub(crate) fn is_deployed(world: &World, entity: Entity) -> bool {
    world
        .get::<&intercept_core::components::Deployment>(entity)
        .map(|d| d.active)
        .unwrap_or(false)
}
