//! Maneuver scheduler: a random walk on heading.
//!
//! Pure functions over a `ManeuverTimer`. Turns are instantaneous; there is
//! no velocity smoothing.

use intercept_core::components::ManeuverTimer;
use intercept_core::constants::*;

use crate::random::UniformSource;

/// Result of advancing a maneuver timer by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverUpdate {
    pub heading: f64,
    /// The turn applied this tick, if the timer fired.
    pub turn: Option<f64>,
}

/// A fresh timer with a newly drawn interval.
pub fn new_timer(rng: &mut impl UniformSource) -> ManeuverTimer {
    ManeuverTimer {
        elapsed_secs: 0.0,
        interval_secs: draw_interval(rng),
    }
}

/// Advance `timer` by `dt_secs`. When the interval is reached, turn by a
/// random angle in `[-MANEUVER_MAX_TURN, MANEUVER_MAX_TURN]`, restart the
/// timer and draw the next interval (turn first, then interval).
pub fn tick(
    timer: &mut ManeuverTimer,
    dt_secs: f64,
    heading: f64,
    rng: &mut impl UniformSource,
) -> ManeuverUpdate {
    timer.elapsed_secs += dt_secs;

    if timer.elapsed_secs < timer.interval_secs {
        return ManeuverUpdate {
            heading,
            turn: None,
        };
    }

    let turn = rng.uniform(-MANEUVER_MAX_TURN, MANEUVER_MAX_TURN);
    timer.elapsed_secs = 0.0;
    timer.interval_secs = draw_interval(rng);

    ManeuverUpdate {
        heading: heading + turn,
        turn: Some(turn),
    }
}

fn draw_interval(rng: &mut impl UniformSource) -> f64 {
    rng.uniform(MANEUVER_INTERVAL_MIN_SECS, MANEUVER_INTERVAL_MAX_SECS)
}
