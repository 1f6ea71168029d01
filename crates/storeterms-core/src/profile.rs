//! Merchant profile input and validation.
//!
//! [`ProfileInput`] is what the input collector gathers: free text that may be
//! empty. [`ProfileInput::validate`] turns it into a [`MerchantProfile`], the
//! only form the renderer accepts.

use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::types::RefundWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Unvalidated merchant attributes as collected from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    /// Company name
    pub name: String,
    /// Company contact email
    pub contact_email: String,
    /// Bare website domain, e.g. `example.com`
    pub website_url: String,
    /// Governing jurisdiction, e.g. `Dehradun, Uttarakhand`
    pub jurisdiction: String,
    /// Privacy compliance contact email
    pub privacy_email: String,
    /// Refund window in days (1-30); `None` means the default of 10
    pub refund_window_days: Option<u32>,
}

impl ProfileInput {
    /// Load profile input from a TOML file.
    ///
    /// Missing keys fall back to empty strings so that validation, not
    /// parsing, reports which required field is absent.
    pub fn from_toml_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading merchant profile from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let input = toml::from_str(&contents)?;
        Ok(input)
    }

    /// Validate all fields.
    ///
    /// Required fields are checked in a fixed order and the first empty or
    /// whitespace-only one is reported. Accepted values are trimmed.
    pub fn validate(&self) -> Result<MerchantProfile, ValidationError> {
        let name = require("Company Name", &self.name)?;
        let contact_email = require("Company Contact Email", &self.contact_email)?;
        let website_url = require("Website URL", &self.website_url)?;
        let jurisdiction = require("Jurisdiction", &self.jurisdiction)?;
        let privacy_email = require("Privacy Compliance Email", &self.privacy_email)?;
        let refund_window = match self.refund_window_days {
            Some(days) => RefundWindow::new(days)?,
            None => RefundWindow::default(),
        };

        Ok(MerchantProfile {
            name,
            contact_email,
            website_url,
            jurisdiction,
            privacy_email,
            refund_window,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Validated merchant attributes.
///
/// Every string field is non-empty. Only obtainable through
/// [`ProfileInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerchantProfile {
    name: String,
    contact_email: String,
    website_url: String,
    jurisdiction: String,
    privacy_email: String,
    refund_window: RefundWindow,
}

impl MerchantProfile {
    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Company contact email.
    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// Bare website domain.
    #[must_use]
    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    /// Governing jurisdiction.
    #[must_use]
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Privacy compliance contact email.
    #[must_use]
    pub fn privacy_email(&self) -> &str {
        &self.privacy_email
    }

    /// Refund window.
    #[must_use]
    pub fn refund_window(&self) -> RefundWindow {
        self.refund_window
    }
}
