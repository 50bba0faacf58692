use std::io::BufRead;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;

use intercept_app::cli::Cli;
use intercept_app::game_loop::{self, LoopOptions};
use intercept_app::state::{self, LoopCommand};
use intercept_app::{runner, settings};
use intercept_core::config::ConfigBounds;
use intercept_core::constants::TICK_RATE;
use intercept_core::state::SessionView;
use intercept_sim::{SessionSettings, SimulationSession};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = settings::resolve(&cli)?;

    let view = if cli.realtime {
        run_realtime(settings, &cli)?
    } else {
        let report = runner::run_headless(settings, cli.dt, cli.max_ticks)?;
        if let Some(tick) = report.detected_at_tick {
            log::info!("detected on tick {tick}, {} maneuvers", report.maneuvers);
        }
        report.final_view
    };

    println!("{}", runner::describe(&view));
    if cli.print_snapshot {
        println!("{}", serde_json::to_string_pretty(&view)?);
    }
    Ok(())
}

/// How often the realtime driver reports the running state.
const STATUS_INTERVAL: Duration = Duration::from_millis(500);

fn run_realtime(settings: SessionSettings, cli: &Cli) -> Result<SessionView> {
    let bounds = settings.bounds;
    let session = SimulationSession::new(settings)?;
    let latest = state::shared_snapshot();
    let handle = game_loop::spawn_game_loop(
        session,
        LoopOptions::realtime(cli.dt, cli.max_ticks),
        latest.clone(),
    )?;

    log::info!(
        "running at {} Hz; commands: pause, resume, toggle, reset, set <interceptor> <target> <zone>, quit",
        TICK_RATE
    );

    let commands = handle.commands.clone();
    std::thread::Builder::new()
        .name("intercept-stdin".into())
        .spawn(move || forward_operator_input(&commands, &bounds))?;

    let mut last_status = String::new();
    while !handle.thread.is_finished() {
        std::thread::sleep(STATUS_INTERVAL);
        if let Some(view) = state::latest(&latest) {
            let status = runner::status_line(&view);
            if status != last_status {
                log::info!("{status}");
                last_status = status;
            }
        }
    }

    handle
        .thread
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))
}

/// Forward stdin lines to the game loop until quit or end of input.
fn forward_operator_input(commands: &mpsc::Sender<LoopCommand>, bounds: &ConfigBounds) {
    for line in std::io::stdin().lock().lines().map_while(|line| line.ok()) {
        let parsed = match state::parse_operator_line(&line, bounds) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("{err:#}");
                continue;
            }
        };
        for command in parsed {
            let shutdown = matches!(command, LoopCommand::Shutdown);
            if commands.send(command).is_err() || shutdown {
                return;
            }
        }
    }
    log::info!("end of operator input, shutting down");
    let _ = commands.send(LoopCommand::Shutdown);
}
