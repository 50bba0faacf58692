//! Engagement state: the phase machine and its per-run counters.
//!
//! Owned by `SimulationSession`, NOT stored as ECS components. Rebuilt from
//! scratch on every reset.

use intercept_core::constants::EXPLOSION_DURATION_SECS;
use intercept_core::enums::{Outcome, SessionPhase};
use intercept_core::events::SessionEvent;
use intercept_core::types::Position;

#[derive(Debug, Clone, Default)]
pub struct EngagementState {
    pub phase: SessionPhase,
    /// Decided result. Set on entering `Exploding` or on escape.
    pub outcome: Option<Outcome>,
    /// Whether the threat has ever been inside the zone this run.
    pub detected: bool,
    /// Whether the responder reacts this tick.
    pub engaged: bool,
    pub explosion_elapsed_secs: f64,
    /// Responder position at the moment of interception.
    pub intercept_position: Option<Position>,
}

impl EngagementState {
    /// Move to `to`, recording a `PhaseChanged` event. No-op if already there.
    pub fn transition(&mut self, to: SessionPhase, events: &mut Vec<SessionEvent>) {
        if self.phase == to {
            return;
        }
        log::debug!("phase {:?} -> {:?}", self.phase, to);
        events.push(SessionEvent::PhaseChanged {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    /// Explosion animation progress, 0..=1.
    pub fn explosion_progress(&self) -> f64 {
        match self.phase {
            SessionPhase::Exploding => {
                (self.explosion_elapsed_secs / EXPLOSION_DURATION_SECS).clamp(0.0, 1.0)
            }
            SessionPhase::Finished(Outcome::Intercepted) => 1.0,
            _ => 0.0,
        }
    }

    /// No actor moves in these phases.
    pub fn is_motion_frozen(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Exploding | SessionPhase::Finished(_)
        )
    }
}
