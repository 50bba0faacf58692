//! Simulation constants and tuning parameters.

use std::f64::consts::FRAC_PI_6;

/// Driver tick rate (Hz) when pacing in wall-clock time.
pub const TICK_RATE: u32 = 30;

/// Simulated seconds advanced per driver tick.
/// One simulated second per frame at 30 Hz, so the demo runs 30x real time.
pub const SIM_DT_SECS: f64 = 1.0;

pub const SECS_PER_HOUR: f64 = 3600.0;

// --- Map ---

/// Visible map width (km). 900 px at 50 px/km.
pub const MAP_WIDTH_KM: f64 = 18.0;

/// Visible map height (km). 700 px at 50 px/km.
pub const MAP_HEIGHT_KM: f64 = 14.0;

/// Renderer scale.
pub const PIXELS_PER_KM: f64 = 50.0;

// --- Spawn ---

/// How far outside the visible map a threat appears (km).
pub const SPAWN_MARGIN_KM: f64 = 1.0;

// --- Boundary ---

/// Inset from each edge the threat is clamped to under `BoundaryPolicy::Clamp` (km).
pub const CLAMP_MARGIN_KM: f64 = 0.5;

/// Distance past an edge at which the threat counts as escaped (km).
pub const ESCAPE_OVERRUN_KM: f64 = 5.0;

// --- Maneuvers ---

/// Largest heading change of a single random maneuver (radians, either side).
pub const MANEUVER_MAX_TURN: f64 = FRAC_PI_6;

/// Shortest interval between maneuvers (seconds).
pub const MANEUVER_INTERVAL_MIN_SECS: f64 = 2.0;

/// Longest interval between maneuvers (seconds).
pub const MANEUVER_INTERVAL_MAX_SECS: f64 = 6.0;

// --- Engagement ---

/// Separation below which the threat is intercepted (km, ~100 m).
pub const INTERCEPT_DISTANCE_KM: f64 = 0.1;

/// Below this separation the reactive actor holds still (km).
pub const MIN_REACTIVE_DISTANCE_KM: f64 = 0.01;

/// Length of the explosion animation before the run finishes (seconds).
pub const EXPLOSION_DURATION_SECS: f64 = 1.0;

// --- Configuration defaults ---

pub const DEFAULT_INTERCEPTOR_SPEED_KMH: f64 = 200.0;
pub const DEFAULT_TARGET_SPEED_KMH: f64 = 100.0;
pub const DEFAULT_ZONE_RADIUS_KM: f64 = 3.0;

pub const SPEED_MIN_KMH: f64 = 0.1;
pub const SPEED_MAX_KMH: f64 = 1000.0;

pub const ZONE_RADIUS_MIN_KM: f64 = 0.1;
pub const ZONE_RADIUS_MAX_KM: f64 = 20.0;
