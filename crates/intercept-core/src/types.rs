//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::YAxis;

/// 2D position on the simulation plane (kilometres).
/// The axis orientation is a presentation concern, see [`YAxis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks actually simulated (paused ticks don't count).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Extent of the visible map, with the origin at one corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width_km: f64,
    pub height_km: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position (km).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing to another position in radians, measured from +x toward +y.
    /// This is the same angle convention as [`heading_vector`].
    pub fn bearing_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Unit vector pointing at `other`, or `None` if both points coincide.
    pub fn direction_to(&self, other: &Position) -> Option<DVec2> {
        (other.to_vec() - self.to_vec()).try_normalize()
    }

    /// Position displaced by `direction * distance`.
    pub fn advanced(self, direction: DVec2, distance: f64) -> Position {
        Position::from_vec(self.to_vec() + direction * distance)
    }
}

/// Unit vector for a heading angle (radians, from +x toward +y).
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::from_angle(heading)
}

impl SimTime {
    /// Advance by one tick of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }

    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_secs / crate::constants::SECS_PER_HOUR
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            width_km: crate::constants::MAP_WIDTH_KM,
            height_km: crate::constants::MAP_HEIGHT_KM,
        }
    }
}

impl MapBounds {
    pub fn new(width_km: f64, height_km: f64) -> Self {
        Self {
            width_km,
            height_km,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width_km / 2.0, self.height_km / 2.0)
    }

    /// Clamp a position to `[margin, extent - margin]` on both axes.
    pub fn clamp(&self, pos: Position, margin_km: f64) -> Position {
        Position::new(
            pos.x.clamp(margin_km, (self.width_km - margin_km).max(margin_km)),
            pos.y.clamp(margin_km, (self.height_km - margin_km).max(margin_km)),
        )
    }

    /// Whether `pos` lies more than `overrun_km` past any edge.
    pub fn is_beyond(&self, pos: &Position, overrun_km: f64) -> bool {
        pos.x < -overrun_km
            || pos.x > self.width_km + overrun_km
            || pos.y < -overrun_km
            || pos.y > self.height_km + overrun_km
    }

    /// Project a map position to screen pixels for a renderer.
    /// Screen space always has y growing downward.
    pub fn to_screen(&self, pos: &Position, pixels_per_km: f64, y_axis: YAxis) -> (f64, f64) {
        let y = match y_axis {
            YAxis::Down => pos.y,
            YAxis::Up => self.height_km - pos.y,
        };
        (pos.x * pixels_per_km, y * pixels_per_km)
    }
}
