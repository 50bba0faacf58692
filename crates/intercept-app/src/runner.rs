//! Headless runner. Ticks a session as fast as possible until it finishes.

use anyhow::{ensure, Result};
use serde::Serialize;

use intercept_core::enums::{Outcome, SessionPhase};
use intercept_core::events::SessionEvent;
use intercept_core::state::SessionView;
use intercept_sim::{SessionSettings, SimulationSession};

/// Summary of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// `None` if the tick budget ran out first.
    pub outcome: Option<Outcome>,
    pub ticks: u64,
    /// Tick on which the threat first entered the zone.
    pub detected_at_tick: Option<u64>,
    pub maneuvers: usize,
    pub final_view: SessionView,
}

pub fn run_headless(settings: SessionSettings, dt_secs: f64, max_ticks: u64) -> Result<RunReport> {
    ensure!(
        dt_secs.is_finite() && dt_secs > 0.0,
        "tick length must be a positive number of seconds, got {dt_secs}"
    );
    let mut session = SimulationSession::new(settings)?;
    let mut detected_at_tick = None;
    let mut maneuvers = 0;

    while !session.phase().is_finished() && session.time().tick < max_ticks {
        for event in session.tick(dt_secs) {
            match event {
                SessionEvent::ThreatDetected { .. } if detected_at_tick.is_none() => {
                    detected_at_tick = Some(session.time().tick);
                }
                SessionEvent::HeadingChanged { .. } => maneuvers += 1,
                _ => {}
            }
        }
    }

    let final_view = session.snapshot();
    if final_view.outcome.is_none() {
        log::warn!("no outcome after {} ticks", final_view.time.tick);
    }

    Ok(RunReport {
        outcome: session.outcome(),
        ticks: final_view.time.tick,
        detected_at_tick,
        maneuvers,
        final_view,
    })
}

/// One-line human summary of a finished (or abandoned) run.
pub fn describe(view: &SessionView) -> String {
    let result = match view.phase.outcome() {
        Some(Outcome::Intercepted) => "intercepted",
        Some(Outcome::Escaped) => "escaped",
        None => "undecided",
    };
    format!(
        "{result} after {:.1} s ({:.4} h): interceptor flew {:.2} km, target flew {:.2} km, separation {:.3} km",
        view.time.elapsed_secs,
        view.time_elapsed_hours,
        view.interceptor.distance_traveled_km,
        view.target.distance_traveled_km,
        view.current_distance_km,
    )
}

/// One-line live status for a running session: the banner, elapsed hours,
/// threat odometer, separation, whether the responder is reacting, and speeds.
pub fn status_line(view: &SessionView) -> String {
    let banner = if view.paused {
        "PAUSED"
    } else {
        match view.phase {
            SessionPhase::Finished(Outcome::Intercepted) => "INTERCEPTED",
            SessionPhase::Finished(Outcome::Escaped) => "ESCAPED",
            SessionPhase::Exploding => "EXPLODING",
            _ => "RUNNING",
        }
    };
    let threat = view.actor(view.role.threat());
    format!(
        "[{banner}] {:.4} h | threat flew {:.2} km | separation {:.3} km | tracking: {} | interceptor {} km/h, target {} km/h",
        view.time_elapsed_hours,
        threat.distance_traveled_km,
        view.current_distance_km,
        if view.phase.is_engaged() { "yes" } else { "no" },
        view.interceptor.speed_kmh,
        view.target.speed_kmh,
    )
}
