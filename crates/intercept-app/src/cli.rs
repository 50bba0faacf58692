//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use intercept_core::enums::{BoundaryPolicy, DetectionPolicy, RoleAssignment, YAxis};
use intercept_sim::SessionSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "intercept", version, about = "2D pursuit-evasion interception simulator")]
pub struct Cli {
    /// JSON file with full session settings. Flags below override it.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Interceptor speed (km/h)
    #[arg(long)]
    pub interceptor_speed: Option<f64>,

    /// Target speed (km/h)
    #[arg(long)]
    pub target_speed: Option<f64>,

    /// Engagement zone radius (km)
    #[arg(long)]
    pub zone_radius: Option<f64>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub role: Option<RoleArg>,

    #[arg(long, value_enum)]
    pub detection: Option<DetectionArg>,

    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryArg>,

    #[arg(long, value_enum)]
    pub y_axis: Option<YAxisArg>,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = intercept_core::constants::SIM_DT_SECS)]
    pub dt: f64,

    /// Give up after this many simulated ticks
    #[arg(long, default_value_t = 10_800)]
    pub max_ticks: u64,

    /// Pace ticks in wall-clock time and read operator commands from stdin
    /// (pause, resume, toggle, reset, set <interceptor> <target> <zone>, quit).
    /// Runs until quit or end of input.
    #[arg(long)]
    pub realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub print_snapshot: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    /// Interceptor chases a wandering target
    Pursuit,
    /// Target flees a wandering interceptor
    Evasion,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionArg {
    Latched,
    Continuous,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryArg {
    Clamp,
    Escape,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAxisArg {
    Down,
    Up,
}

impl From<RoleArg> for RoleAssignment {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Pursuit => RoleAssignment::Pursuit,
            RoleArg::Evasion => RoleAssignment::Evasion,
        }
    }
}

impl From<DetectionArg> for DetectionPolicy {
    fn from(arg: DetectionArg) -> Self {
        match arg {
            DetectionArg::Latched => DetectionPolicy::Latched,
            DetectionArg::Continuous => DetectionPolicy::Continuous,
        }
    }
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Clamp => BoundaryPolicy::Clamp,
            BoundaryArg::Escape => BoundaryPolicy::Escape,
        }
    }
}

impl From<YAxisArg> for YAxis {
    fn from(arg: YAxisArg) -> Self {
        match arg {
            YAxisArg::Down => YAxis::Down,
            YAxisArg::Up => YAxis::Up,
        }
    }
}

impl Cli {
    /// Overlay every flag that was given onto `settings`.
    pub fn apply_overrides(&self, settings: &mut SessionSettings) {
        if let Some(speed) = self.interceptor_speed {
            settings.config.interceptor_speed_kmh = speed;
        }
        if let Some(speed) = self.target_speed {
            settings.config.target_speed_kmh = speed;
        }
        if let Some(radius) = self.zone_radius {
            settings.config.zone_radius_km = radius;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(role) = self.role {
            settings.rules.role = role.into();
        }
        if let Some(detection) = self.detection {
            settings.rules.detection = detection.into();
        }
        if let Some(boundary) = self.boundary {
            settings.rules.boundary = boundary.into();
        }
        if let Some(y_axis) = self.y_axis {
            settings.rules.y_axis = y_axis.into();
        }
    }
}
