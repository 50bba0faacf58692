//! Session settings resolution: JSON file, then command-line overrides.

use std::path::Path;

use anyhow::{bail, Context, Result};

use intercept_sim::SessionSettings;

use crate::cli::Cli;

/// Read full `SessionSettings` from a JSON file. Missing fields take defaults.
pub fn load_settings(path: &Path) -> Result<SessionSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

/// Final settings for a run, validated.
pub fn resolve(cli: &Cli) -> Result<SessionSettings> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SessionSettings::default(),
    };
    cli.apply_overrides(&mut settings);

    settings
        .config
        .validate(&settings.bounds)
        .context("invalid session configuration")?;

    if !(cli.dt.is_finite() && cli.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", cli.dt);
    }

    log::debug!("resolved settings: {settings:?}");
    Ok(settings)
}
