//! `storeterms config`: locate, create and print configuration.

use anyhow::{bail, Context};
use std::path::Path;
use std::process::ExitCode;
use storeterms_core::AppConfig;

/// Print the configuration file location.
pub fn path() -> anyhow::Result<ExitCode> {
    println!("{}", AppConfig::config_path()?.display());
    Ok(ExitCode::SUCCESS)
}

/// Write a default configuration file.
pub fn init(force: bool) -> anyhow::Result<ExitCode> {
    let path = AppConfig::config_path()?;
    if path.exists() && !force {
        bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let written = AppConfig::default()
        .save()
        .context("failed to write config")?;
    println!("Wrote {}", written.display());
    Ok(ExitCode::SUCCESS)
}

/// Print the effective configuration.
pub fn show(config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = super::load_config(config_path).context("failed to load config")?;
    print!("{}", config.to_toml_string()?);
    Ok(ExitCode::SUCCESS)
}
