//! Lifecycle commands sent from a driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// All operator actions on a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Store new parameters. They take effect at the next reset.
    Configure { config: SessionConfig },
    /// Start the run over with the stored parameters.
    Reset,
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Flip between paused and running.
    TogglePause,
}
