//! Maneuver system. Applies the random heading walk to the threat.

use hecs::World;

use intercept_core::components::{Actor, Heading, ManeuverTimer};
use intercept_core::events::SessionEvent;
use intercept_threat_ai::{maneuver, UniformSource};

use crate::world_setup::ActorHandles;

pub fn run(
    world: &mut World,
    actors: &ActorHandles,
    dt_secs: f64,
    rng: &mut impl UniformSource,
    events: &mut Vec<SessionEvent>,
) {
    let Ok((actor, timer, heading)) =
        world.query_one_mut::<(&Actor, &mut ManeuverTimer, &mut Heading)>(actors.threat)
    else {
        return;
    };

    let update = maneuver::tick(timer, dt_secs, heading.0, rng);
    heading.0 = update.heading;

    if let Some(turn) = update.turn {
        log::trace!("{:?} turned {:+.3} rad to {:.3}", actor.kind, turn, update.heading);
        events.push(SessionEvent::HeadingChanged {
            actor: actor.kind,
            heading: update.heading,
            turn,
        });
    }
}
