//! Spawn system. Places a dormant threat just beyond a random map edge.

use hecs::World;

use intercept_core::components::{Actor, Deployment, Heading};
use intercept_core::config::EngagementRules;
use intercept_core::enums::SessionPhase;
use intercept_core::events::SessionEvent;
use intercept_core::types::Position;
use intercept_threat_ai::spawn::plan_spawn;
use intercept_threat_ai::UniformSource;

use crate::engagement::EngagementState;
use crate::world_setup::ActorHandles;

/// Deploy the threat if it isn't on the map yet. Runs every tick, acts at
/// most once per run.
pub fn run(
    world: &mut World,
    actors: &ActorHandles,
    rules: &EngagementRules,
    state: &mut EngagementState,
    rng: &mut impl UniformSource,
    events: &mut Vec<SessionEvent>,
) {
    if super::is_deployed(world, actors.threat) {
        return;
    }

    let toward = super::position_of(world, actors.responder).unwrap_or_else(|| rules.map.center());
    let placement = plan_spawn(&rules.map, &toward, rules.y_axis, rng);

    let Ok((actor, pos, heading, deployment)) = world
        .query_one_mut::<(&Actor, &mut Position, &mut Heading, &mut Deployment)>(actors.threat)
    else {
        return;
    };
    *pos = placement.position;
    heading.0 = placement.heading;
    deployment.active = true;

    log::info!(
        "{:?} spawned beyond {:?} edge at ({:.2}, {:.2}), heading {:.3} rad",
        actor.kind,
        placement.edge,
        placement.position.x,
        placement.position.y,
        placement.heading
    );

    events.push(SessionEvent::ThreatSpawned {
        actor: actor.kind,
        position: placement.position,
        heading: placement.heading,
        edge: placement.edge,
    });
    state.transition(SessionPhase::Spawning, events);
}
