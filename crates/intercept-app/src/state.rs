//! State shared between the driver and the game loop thread.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};

use intercept_core::commands::SessionCommand;
use intercept_core::config::{ConfigBounds, SessionConfig};
use intercept_core::state::SessionView;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A lifecycle command to forward to the session.
    Session(SessionCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<SessionView>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Copy of the most recently published snapshot, if any.
pub fn latest(snapshot: &SharedSnapshot) -> Option<SessionView> {
    snapshot.lock().ok().and_then(|lock| lock.clone())
}

/// Map an operator's stdin line to the loop commands it stands for.
///
/// `set <interceptor km/h> <target km/h> <zone km>` validates the values
/// against `bounds`, then stores them and restarts the run.
pub fn parse_operator_line(line: &str, bounds: &ConfigBounds) -> Result<Vec<LoopCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        bail!("empty command");
    };
    let forward = |command| Ok(vec![LoopCommand::Session(command)]);

    match verb.to_ascii_lowercase().as_str() {
        "pause" | "p" => forward(SessionCommand::Pause),
        "resume" | "r" => forward(SessionCommand::Resume),
        "toggle" | "space" => forward(SessionCommand::TogglePause),
        "reset" => forward(SessionCommand::Reset),
        "quit" | "q" | "exit" => Ok(vec![LoopCommand::Shutdown]),
        "set" => {
            let values = words
                .map(|word| {
                    word.parse::<f64>()
                        .with_context(|| format!("{word:?} is not a number"))
                })
                .collect::<Result<Vec<_>>>()?;
            let [interceptor, target, zone] = values[..] else {
                bail!("usage: set <interceptor km/h> <target km/h> <zone km>");
            };
            let config = SessionConfig::new(interceptor, target, zone);
            config.validate(bounds)?;
            Ok(vec![
                LoopCommand::Session(SessionCommand::Configure { config }),
                LoopCommand::Session(SessionCommand::Reset),
            ])
        }
        other => bail!("unknown command {other:?}"),
    }
}
