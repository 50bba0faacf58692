//! Game loop thread. Runs a simulation session at 30Hz and publishes snapshots.
//!
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in
//! shared state for polling by the driver.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use intercept_core::constants::TICK_RATE;
use intercept_core::state::SessionView;
use intercept_sim::SimulationSession;

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Simulated seconds per tick.
    pub dt_secs: f64,
    /// Wall-clock time per tick. Zero runs flat out.
    pub tick_duration: Duration,
    /// Stop once the run has simulated this many ticks.
    pub max_ticks: u64,
    /// Return as soon as the run finishes. Otherwise the loop idles on the
    /// finished session until reset or shutdown.
    pub exit_on_finish: bool,
}

impl LoopOptions {
    pub fn realtime(dt_secs: f64, max_ticks: u64) -> Self {
        Self {
            dt_secs,
            tick_duration: TICK_DURATION,
            max_ticks,
            exit_on_finish: false,
        }
    }
}

/// Handle to a running game loop.
pub struct GameLoop {
    pub commands: mpsc::Sender<LoopCommand>,
    pub thread: JoinHandle<SessionView>,
}

/// Spawns the game loop in a new thread. The thread returns the final
/// snapshot when it is told to shut down, the tick budget is spent, or
/// (with `exit_on_finish`) the run finishes.
pub fn spawn_game_loop(
    session: SimulationSession,
    options: LoopOptions,
    latest_snapshot: SharedSnapshot,
) -> io::Result<GameLoop> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("intercept-game-loop".into())
        .spawn(move || run_game_loop(session, options, cmd_rx, &latest_snapshot))?;

    Ok(GameLoop {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or the tick budget.
fn run_game_loop(
    mut session: SimulationSession,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> SessionView {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Session(cmd)) => {
                    session.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("game loop shutting down");
                    return session.snapshot();
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (the session handles pause internally)
        session.tick(options.dt_secs);
        let snapshot = session.snapshot();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        let finished = options.exit_on_finish && snapshot.phase.is_finished();
        if finished || snapshot.time.tick >= options.max_ticks {
            return snapshot;
        }

        // 4. Sleep until next tick
        if options.tick_duration.is_zero() {
            continue;
        }
        next_tick_time += options.tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > options.tick_duration * 2 {
            // Fell behind; resync instead of bursting to catch up
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intercept_core::commands::SessionCommand;
    use intercept_sim::SessionSettings;

    use crate::state::{latest, shared_snapshot};

    fn fast(max_ticks: u64) -> LoopOptions {
        LoopOptions {
            dt_secs: 1.0,
            tick_duration: Duration::ZERO,
            max_ticks,
            exit_on_finish: true,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Session(SessionCommand::Reset)).unwrap();
        tx.send(LoopCommand::Session(SessionCommand::Pause)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Session(SessionCommand::Reset)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Session(SessionCommand::Pause)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_budget() {
        let session = SimulationSession::new(SessionSettings::default()).unwrap();
        let snapshot = shared_snapshot();
        let game_loop = spawn_game_loop(session, fast(25), snapshot.clone()).unwrap();

        let last = game_loop.thread.join().unwrap();
        assert_eq!(last.time.tick, 25);
        assert_eq!(latest(&snapshot), Some(last));
    }

    #[test]
    fn test_loop_stops_when_run_finishes() {
        let settings = SessionSettings {
            config: intercept_core::config::SessionConfig::new(200.0, 100.0, 20.0),
            ..Default::default()
        };
        let session = SimulationSession::new(settings).unwrap();
        let game_loop = spawn_game_loop(session, fast(100_000), shared_snapshot()).unwrap();

        let last = game_loop.thread.join().unwrap();
        assert!(last.phase.is_finished());
        assert!(last.time.tick < 100_000);
    }

    #[test]
    fn test_loop_shuts_down_on_command() {
        let session = SimulationSession::new(SessionSettings::default()).unwrap();
        let snapshot = shared_snapshot();
        let options = LoopOptions::realtime(1.0, u64::MAX);
        let game_loop = spawn_game_loop(session, options, snapshot.clone()).unwrap();

        game_loop
            .commands
            .send(LoopCommand::Session(SessionCommand::Pause))
            .unwrap();

        wait_for(&snapshot, "pause", |view| view.paused);
        game_loop.commands.send(LoopCommand::Shutdown).unwrap();

        let last = game_loop.thread.join().unwrap();
        assert!(last.paused);
    }

    fn wait_for(snapshot: &SharedSnapshot, what: &str, pred: impl Fn(&SessionView) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !latest(snapshot).is_some_and(|view| pred(&view)) {
            assert!(Instant::now() < deadline, "{what} never observed");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_reset_after_finished_run_starts_over() {
        let settings = SessionSettings {
            config: intercept_core::config::SessionConfig::new(200.0, 100.0, 20.0),
            ..Default::default()
        };
        let session = SimulationSession::new(settings).unwrap();
        let snapshot = shared_snapshot();
        let options = LoopOptions {
            tick_duration: Duration::from_millis(2),
            ..LoopOptions::realtime(1.0, u64::MAX)
        };
        let game_loop = spawn_game_loop(session, options, snapshot.clone()).unwrap();

        wait_for(&snapshot, "finished run", |view| view.phase.is_finished());
        // Still listening after the finish.
        game_loop
            .commands
            .send(LoopCommand::Session(SessionCommand::Reset))
            .unwrap();
        wait_for(&snapshot, "fresh run", |view| view.outcome.is_none());

        game_loop.commands.send(LoopCommand::Shutdown).unwrap();
        let last = game_loop.thread.join().unwrap();
        assert!(last.time.tick < 1_000);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
