//! Configuration management for storeterms.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{DocumentKind, RefundWindow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/storeterms/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for merchant input
    pub defaults: DefaultsConfig,
    /// Which documents to generate and how to title them
    pub documents: DocumentsConfig,
    /// Where and how rendered documents are delivered
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            Self::from_toml_str(&contents)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and check configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `STORETERMS_REFUND_WINDOW_DAYS`: Override the default refund window
    /// - `STORETERMS_OUTPUT_DIR`: Override the output directory
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in practice).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("STORETERMS_REFUND_WINDOW_DAYS") {
            if let Ok(days) = val.parse() {
                self.defaults.refund_window_days = days;
                tracing::debug!("Override defaults.refund_window_days from env: {}", days);
            }
        }

        if let Some(val) = lookup("STORETERMS_OUTPUT_DIR") {
            if !val.is_empty() {
                tracing::debug!("Override output.directory from env: {}", val);
                self.output.directory = PathBuf::from(val);
            }
        }

        self.validate()
    }

    /// Check values that serde cannot constrain.
    pub fn validate(&self) -> ConfigResult<()> {
        RefundWindow::new(self.defaults.refund_window_days).map_err(|e| {
            ConfigError::InvalidValue {
                field: "defaults.refund_window_days".to_string(),
                reason: e.to_string(),
            }
        })?;

        for (kind, title) in &self.documents.titles {
            if title.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("documents.titles.{}", kind.slug()),
                    reason: "title cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<PathBuf> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        fs::write(&config_path, self.to_toml_string()?)?;
        Ok(config_path)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/storeterms/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "storeterms", "storeterms").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Defaults applied to merchant input the user leaves unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Refund window in days (1-30)
    pub refund_window_days: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            refund_window_days: u32::from(RefundWindow::DEFAULT),
        }
    }
}

/// Document selection and titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Generate the shipping and return policy
    pub return_policy: bool,
    /// Generate the privacy policy
    pub privacy_policy: bool,
    /// Generate the terms and conditions
    pub terms_conditions: bool,
    /// Display title overrides keyed by document kind
    pub titles: BTreeMap<DocumentKind, String>,
}

impl DocumentsConfig {
    /// Whether `kind` is selected.
    #[must_use]
    pub fn is_enabled(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::ReturnPolicy => self.return_policy,
            DocumentKind::PrivacyPolicy => self.privacy_policy,
            DocumentKind::TermsConditions => self.terms_conditions,
        }
    }

    /// Select or deselect `kind`.
    pub fn set_enabled(&mut self, kind: DocumentKind, enabled: bool) {
        match kind {
            DocumentKind::ReturnPolicy => self.return_policy = enabled,
            DocumentKind::PrivacyPolicy => self.privacy_policy = enabled,
            DocumentKind::TermsConditions => self.terms_conditions = enabled,
        }
    }

    /// Selected kinds, in display order.
    #[must_use]
    pub fn selected(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// Title to display for `kind`, honoring overrides.
    #[must_use]
    pub fn title_for(&self, kind: DocumentKind) -> &str {
        self.titles.get(&kind).map_or(kind.title(), String::as_str)
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            return_policy: true,
            privacy_policy: true,
            terms_conditions: true,
            titles: BTreeMap::new(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory rendered files are written to
    pub directory: PathBuf,
    /// Also write the assembled page with view and download sections
    pub write_page: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            write_page: false,
        }
    }
}
