//! Session parameters and their validation.
//!
//! `SessionConfig` carries the three operator-entered values. `ConfigBounds`
//! holds the closed range each one must fall in, and `EngagementRules` picks
//! the engagement variant (roles, detection latch, boundary behavior).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BoundaryPolicy, DetectionPolicy, RoleAssignment, YAxis};
use crate::types::MapBounds;

/// Operator-tunable parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub interceptor_speed_kmh: f64,
    pub target_speed_kmh: f64,
    pub zone_radius_km: f64,
}

/// A closed numeric range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

/// Allowed range for every `SessionConfig` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBounds {
    pub interceptor_speed_kmh: FieldBounds,
    pub target_speed_kmh: FieldBounds,
    pub zone_radius_km: FieldBounds,
}

/// Names a `SessionConfig` field in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigField {
    InterceptorSpeed,
    TargetSpeed,
    ZoneRadius,
}

/// A `SessionConfig` value outside its allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{field} = {value} is outside the allowed range {allowed}")]
pub struct ValidationError {
    pub field: ConfigField,
    pub value: f64,
    pub allowed: FieldBounds,
}

/// Engagement variant selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementRules {
    pub role: RoleAssignment,
    pub detection: DetectionPolicy,
    pub boundary: BoundaryPolicy,
    pub y_axis: YAxis,
    pub map: MapBounds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interceptor_speed_kmh: DEFAULT_INTERCEPTOR_SPEED_KMH,
            target_speed_kmh: DEFAULT_TARGET_SPEED_KMH,
            zone_radius_km: DEFAULT_ZONE_RADIUS_KM,
        }
    }
}

impl SessionConfig {
    pub fn new(interceptor_speed_kmh: f64, target_speed_kmh: f64, zone_radius_km: f64) -> Self {
        Self {
            interceptor_speed_kmh,
            target_speed_kmh,
            zone_radius_km,
        }
    }

    /// Check every field against `bounds`, reporting the first failure.
    pub fn validate(&self, bounds: &ConfigBounds) -> Result<(), ValidationError> {
        bounds
            .interceptor_speed_kmh
            .check(ConfigField::InterceptorSpeed, self.interceptor_speed_kmh)?;
        bounds
            .target_speed_kmh
            .check(ConfigField::TargetSpeed, self.target_speed_kmh)?;
        bounds
            .zone_radius_km
            .check(ConfigField::ZoneRadius, self.zone_radius_km)?;
        Ok(())
    }
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. Non-positive and NaN values never pass.
    pub fn contains(&self, value: f64) -> bool {
        value > 0.0 && value >= self.min && value <= self.max
    }

    fn check(&self, field: ConfigField, value: f64) -> Result<(), ValidationError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError {
                field,
                value,
                allowed: *self,
            })
        }
    }
}

impl Default for ConfigBounds {
    fn default() -> Self {
        Self {
            interceptor_speed_kmh: FieldBounds::new(SPEED_MIN_KMH, SPEED_MAX_KMH),
            target_speed_kmh: FieldBounds::new(SPEED_MIN_KMH, SPEED_MAX_KMH),
            zone_radius_km: FieldBounds::new(ZONE_RADIUS_MIN_KM, ZONE_RADIUS_MAX_KM),
        }
    }
}

impl fmt::Display for FieldBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigField::InterceptorSpeed => "interceptor speed (km/h)",
            ConfigField::TargetSpeed => "target speed (km/h)",
            ConfigField::ZoneRadius => "zone radius (km)",
        };
        f.write_str(name)
    }
}
