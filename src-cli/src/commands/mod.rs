//! Command implementations.

pub mod config;
pub mod generate;
pub mod templates;

use std::path::Path;
use storeterms_core::{AppConfig, ConfigResult};

/// Load configuration from `path` if given, else from the user config
/// directory, then apply environment overrides.
pub fn load_config(path: Option<&Path>) -> ConfigResult<AppConfig> {
    match path {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_env_overrides(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => AppConfig::load_with_env(),
    }
}
