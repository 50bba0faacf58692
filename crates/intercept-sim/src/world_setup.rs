//! Actor spawn factories for setting up the simulation world.
//!
//! Creates the two actor entities with the component bundle matching
//! their role: the responder anchored at map center, the threat dormant
//! until the spawn system places it.

use hecs::{Entity, EntityBuilder, World};

use intercept_core::components::*;
use intercept_core::config::{EngagementRules, SessionConfig};
use intercept_core::constants::SECS_PER_HOUR;
use intercept_core::enums::ActorKind;
use intercept_core::types::Position;

/// Entity handles for the two actors, by kind and by role.
#[derive(Debug, Clone, Copy)]
pub struct ActorHandles {
    pub interceptor: Entity,
    pub target: Entity,
    pub threat: Entity,
    pub responder: Entity,
}

impl ActorHandles {
    pub fn get(&self, kind: ActorKind) -> Entity {
        match kind {
            ActorKind::Interceptor => self.interceptor,
            ActorKind::Target => self.target,
        }
    }
}

/// Clear the world and spawn both actors for a fresh run.
pub fn setup_actors(
    world: &mut World,
    config: &SessionConfig,
    rules: &EngagementRules,
    timer: ManeuverTimer,
) -> ActorHandles {
    world.clear();

    let threat_kind = rules.role.threat();
    let mut builders = [ActorKind::Interceptor, ActorKind::Target].map(|kind| {
        let speed_kmh = match kind {
            ActorKind::Interceptor => config.interceptor_speed_kmh,
            ActorKind::Target => config.target_speed_kmh,
        };
        let mut builder = actor_builder(kind, speed_kmh);
        if kind == threat_kind {
            builder
                .add(Threat)
                .add(timer)
                .add(Position::default())
                .add(Deployment { active: false });
        } else {
            builder
                .add(Responder)
                .add(rules.map.center())
                .add(Deployment { active: true });
        }
        builder
    });

    let interceptor = world.spawn(builders[0].build());
    let target = world.spawn(builders[1].build());

    let (threat, responder) = match threat_kind {
        ActorKind::Interceptor => (interceptor, target),
        ActorKind::Target => (target, interceptor),
    };

    ActorHandles {
        interceptor,
        target,
        threat,
        responder,
    }
}

fn actor_builder(kind: ActorKind, speed_kmh: f64) -> EntityBuilder {
    let mut builder = EntityBuilder::new();
    builder
        .add(Actor { kind })
        .add(Heading::default())
        .add(Speed {
            kmh: speed_kmh,
            km_per_sec: speed_kmh / SECS_PER_HOUR,
        })
        .add(Odometer::default());
    builder
}
