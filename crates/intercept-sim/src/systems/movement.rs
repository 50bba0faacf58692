//! Kinematic integration.
//!
//! Constant speed, no acceleration: position += direction * speed * dt.
//! Every step also feeds the actor's odometer.

use glam::DVec2;
use hecs::{Entity, World};

use intercept_core::components::{Heading, Odometer, Speed};
use intercept_core::types::{heading_vector, Position};

use crate::world_setup::ActorHandles;

/// Move the threat along its own heading.
pub fn advance_threat(world: &mut World, actors: &ActorHandles, dt_secs: f64) {
    if let Ok((pos, heading, speed, odometer)) = world
        .query_one_mut::<(&mut Position, &Heading, &Speed, &mut Odometer)>(actors.threat)
    {
        let step = speed.km_per_sec * dt_secs;
        *pos = pos.advanced(heading_vector(heading.0), step);
        odometer.distance_km += step;
    }
}

/// Move `entity` one step along the unit vector `direction`, turning it to face
/// the direction of travel.
pub fn step_along(world: &mut World, entity: Entity, direction: DVec2, dt_secs: f64) {
    if let Ok((pos, heading, speed, odometer)) = world
        .query_one_mut::<(&mut Position, &mut Heading, &Speed, &mut Odometer)>(entity)
    {
        let step = speed.km_per_sec * dt_secs;
        *pos = pos.advanced(direction, step);
        heading.0 = direction.y.atan2(direction.x);
        odometer.distance_km += step;
    }
}
