//! Simulation engine, the core of the simulator.
//!
//! `SimulationSession` owns the hecs ECS world, processes lifecycle commands,
//! runs all systems, and produces `SessionView` snapshots. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use serde::{Deserialize, Serialize};

use intercept_core::commands::SessionCommand;
use intercept_core::config::{ConfigBounds, EngagementRules, SessionConfig, ValidationError};
use intercept_core::enums::{Outcome, SessionPhase};
use intercept_core::events::SessionEvent;
use intercept_core::state::SessionView;
use intercept_core::types::SimTime;
use intercept_threat_ai::{maneuver, SeededSource, UniformSource};

use crate::engagement::EngagementState;
use crate::systems;
use crate::systems::snapshot::SnapshotInput;
use crate::world_setup::{self, ActorHandles};

/// Everything needed to start a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    pub config: SessionConfig,
    pub bounds: ConfigBounds,
    pub rules: EngagementRules,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            config: SessionConfig::default(),
            bounds: ConfigBounds::default(),
            rules: EngagementRules::default(),
        }
    }
}

/// One engagement session. Owns the ECS world and all sim state.
///
/// Generic over the random source so tests can script every draw.
pub struct SimulationSession<R = SeededSource> {
    world: World,
    actors: ActorHandles,
    state: EngagementState,
    time: SimTime,
    paused: bool,
    /// Parameters of the run in progress.
    active: SessionConfig,
    /// Last accepted parameters; copied into `active` on reset.
    config: SessionConfig,
    bounds: ConfigBounds,
    rules: EngagementRules,
    rng: R,
    command_queue: VecDeque<SessionCommand>,
}

impl SimulationSession<SeededSource> {
    /// Create a session seeded from `settings.seed`.
    pub fn new(settings: SessionSettings) -> Result<Self, ValidationError> {
        Self::with_source(settings, SeededSource::from_seed(settings.seed))
    }
}

impl<R: UniformSource> SimulationSession<R> {
    /// Create a session drawing randomness from `rng`. The session starts reset.
    pub fn with_source(settings: SessionSettings, mut rng: R) -> Result<Self, ValidationError> {
        settings.config.validate(&settings.bounds)?;

        let mut world = World::new();
        let timer = maneuver::new_timer(&mut rng);
        let actors = world_setup::setup_actors(&mut world, &settings.config, &settings.rules, timer);

        log::debug!(
            "session created: {:?}, {:?}, seed {}",
            settings.config,
            settings.rules.role,
            settings.seed
        );

        Ok(Self {
            world,
            actors,
            state: EngagementState::default(),
            time: SimTime::default(),
            paused: false,
            active: settings.config,
            config: settings.config,
            bounds: settings.bounds,
            rules: settings.rules,
            rng,
            command_queue: VecDeque::new(),
        })
    }

    /// Validate and store new parameters. They take effect at the next reset;
    /// on rejection nothing changes.
    pub fn configure(&mut self, config: SessionConfig) -> Result<(), ValidationError> {
        if let Err(err) = config.validate(&self.bounds) {
            log::warn!("configuration rejected: {err}");
            return Err(err);
        }
        log::info!("configuration stored: {config:?}");
        self.config = config;
        Ok(())
    }

    /// Start over with the stored parameters: both actors rebuilt, the threat
    /// dormant, time and counters zeroed, running.
    pub fn reset(&mut self) {
        let timer = maneuver::new_timer(&mut self.rng);
        self.actors = world_setup::setup_actors(&mut self.world, &self.config, &self.rules, timer);
        self.active = self.config;
        self.state = EngagementState::default();
        self.time = SimTime::default();
        self.paused = false;
        log::info!("session reset: {:?}", self.active);
    }

    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("paused at tick {}", self.time.tick);
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            log::debug!("resumed at tick {}", self.time.tick);
        }
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply a command immediately.
    pub fn apply(&mut self, command: SessionCommand) -> Result<(), ValidationError> {
        match command {
            SessionCommand::Configure { config } => self.configure(config)?,
            SessionCommand::Reset => self.reset(),
            SessionCommand::Pause => self.pause(),
            SessionCommand::Resume => self.resume(),
            SessionCommand::TogglePause => self.toggle_pause(),
        }
        Ok(())
    }

    /// Advance the simulation by `dt_secs` simulated seconds.
    ///
    /// Queued commands are applied first. Paused and finished sessions don't
    /// change. Returns what happened during the tick.
    pub fn tick(&mut self, dt_secs: f64) -> Vec<SessionEvent> {
        self.process_commands();

        if !(dt_secs.is_finite() && dt_secs > 0.0) {
            log::warn!("ignoring tick with invalid dt {dt_secs}");
            return Vec::new();
        }
        if self.paused || self.state.phase.is_finished() {
            return Vec::new();
        }

        let events = self.run_systems(dt_secs);
        self.time.advance(dt_secs);
        events
    }

    /// Tick until the run finishes or `max_ticks` have been simulated.
    /// Stops early if paused with nothing queued. Returns the outcome, if
    /// the run finished.
    pub fn run_until_finished(&mut self, dt_secs: f64, max_ticks: u64) -> Option<Outcome> {
        for _ in 0..max_ticks {
            let stalled = self.paused && self.command_queue.is_empty();
            if self.state.phase.is_finished() || stalled {
                break;
            }
            self.tick(dt_secs);
        }
        self.state.phase.outcome()
    }

    /// Read-only projection of the current state.
    pub fn snapshot(&self) -> SessionView {
        systems::snapshot::build_snapshot(SnapshotInput {
            world: &self.world,
            actors: &self.actors,
            state: &self.state,
            rules: &self.rules,
            time: self.time,
            zone_radius_km: self.active.zone_radius_km,
            paused: self.paused,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Last accepted parameters (applied at the next reset).
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parameters of the run in progress.
    pub fn active_config(&self) -> &SessionConfig {
        &self.active
    }

    pub fn rules(&self) -> &EngagementRules {
        &self.rules
    }

    pub fn bounds(&self) -> &ConfigBounds {
        &self.bounds
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn actors(&self) -> &ActorHandles {
        &self.actors
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            // Rejections are already logged by `configure`.
            let _ = self.apply(command);
        }
    }

    fn run_systems(&mut self, dt_secs: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if self.state.is_motion_frozen() {
            systems::intercept::advance_explosion(&mut self.state, dt_secs, &mut events);
            return events;
        }

        // 1. Threat deployment
        systems::spawn::run(
            &mut self.world,
            &self.actors,
            &self.rules,
            &mut self.state,
            &mut self.rng,
            &mut events,
        );

        // 2. Threat motion
        systems::maneuver::run(&mut self.world, &self.actors, dt_secs, &mut self.rng, &mut events);
        systems::movement::advance_threat(&mut self.world, &self.actors, dt_secs);
        systems::boundary::clamp_threat(&mut self.world, &self.actors, &self.rules);

        // 3. Zone test
        systems::detection::run(
            &self.world,
            &self.actors,
            self.active.zone_radius_km,
            &self.rules,
            &mut self.state,
            &mut events,
        );

        // 4. Reactive motion
        if self.state.engaged {
            systems::reaction::run(&mut self.world, &self.actors, &self.rules, dt_secs);
        }

        // 5. Interception. The explosion clock starts on this same tick.
        systems::intercept::check(&self.world, &self.actors, &mut self.state, &mut events);
        systems::intercept::advance_explosion(&mut self.state, dt_secs, &mut events);

        // 6. Escape
        systems::boundary::check_escape(
            &self.world,
            &self.actors,
            &self.rules,
            &mut self.state,
            &mut events,
        );

        for event in &events {
            log::trace!("tick {}: {:?}", self.time.tick, event);
        }
        events
    }
}
