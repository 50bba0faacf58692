//! Snapshot builder. Projects the world and engagement state into a `SessionView`.

use hecs::{Entity, World};

use intercept_core::components::{Deployment, Heading, Odometer, Speed};
use intercept_core::config::EngagementRules;
use intercept_core::state::{ActorView, SessionView, ZoneView};
use intercept_core::types::{Position, SimTime};

use crate::engagement::EngagementState;
use crate::world_setup::ActorHandles;

pub struct SnapshotInput<'a> {
    pub world: &'a World,
    pub actors: &'a ActorHandles,
    pub state: &'a EngagementState,
    pub rules: &'a EngagementRules,
    pub time: SimTime,
    pub zone_radius_km: f64,
    pub paused: bool,
}

pub fn build_snapshot(input: SnapshotInput<'_>) -> SessionView {
    let SnapshotInput {
        world,
        actors,
        state,
        rules,
        time,
        zone_radius_km,
        paused,
    } = input;

    let responder = super::position_of(world, actors.responder).unwrap_or_else(|| rules.map.center());

    SessionView {
        time,
        time_elapsed_hours: time.elapsed_hours(),
        phase: state.phase,
        outcome: state.outcome,
        paused,
        role: rules.role,
        map: rules.map,
        interceptor: actor_view(world, actors.interceptor),
        target: actor_view(world, actors.target),
        current_distance_km: super::separation(world, actors).unwrap_or(0.0),
        zone: ZoneView {
            center: responder,
            radius_km: zone_radius_km,
        },
        detected: state.detected,
        explosion_progress: state.explosion_progress(),
        explosion_position: state.intercept_position,
    }
}

fn actor_view(world: &World, entity: Entity) -> ActorView {
    let mut query = match world.query_one::<(&Position, &Heading, &Speed, &Odometer, &Deployment)>(entity) {
        Ok(query) => query,
        Err(_) => return ActorView::default(),
    };
    match query.get() {
        Some((pos, heading, speed, odometer, deployment)) => ActorView {
            position: *pos,
            heading: heading.0,
            speed_kmh: speed.kmh,
            distance_traveled_km: odometer.distance_km,
            active: deployment.active,
        },
        None => ActorView::default(),
    }
}
