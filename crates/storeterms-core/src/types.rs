//! Shared types used across the store terms generator.
//!
//! This module defines the newtypes and enums that flow between the input
//! collector, the document renderer and delivery.

use crate::error::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days within which returns are accepted.
///
/// Always within `MIN..=MAX`; the constructor is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RefundWindow(u8);

impl RefundWindow {
    /// Shortest accepted refund window.
    pub const MIN: u8 = 1;
    /// Longest accepted refund window.
    pub const MAX: u8 = 30;
    /// Refund window used when none is supplied.
    pub const DEFAULT: u8 = 10;

    /// Create a refund window from a day count.
    ///
    /// # Errors
    /// Returns error if `days` is outside `1..=30`.
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        match u8::try_from(days) {
            Ok(d) if (Self::MIN..=Self::MAX).contains(&d) => Ok(Self(d)),
            _ => Err(ValidationError::RefundWindowOutOfRange {
                value: days,
                min: Self::MIN,
                max: Self::MAX,
            }),
        }
    }

    /// Get the number of days.
    #[must_use]
    pub fn days(self) -> u8 {
        self.0
    }
}

impl Default for RefundWindow {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for RefundWindow {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<RefundWindow> for u32 {
    fn from(window: RefundWindow) -> Self {
        u32::from(window.0)
    }
}

impl fmt::Display for RefundWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date a document is issued "as of".
///
/// Rendered into templates in long form, e.g. `January 05, 2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AsOfDate(NaiveDate);

impl AsOfDate {
    /// Format used for the "last updated" line.
    pub const LONG_FORMAT: &'static str = "%B %d, %Y";

    /// Today's date in the local timezone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Wrap a `NaiveDate`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: s.to_string(),
            })
    }

    /// Get the inner `NaiveDate`.
    #[must_use]
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Long human-readable form, e.g. `January 05, 2025`.
    #[must_use]
    pub fn long_format(&self) -> String {
        self.0.format(Self::LONG_FORMAT).to_string()
    }
}

impl fmt::Display for AsOfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_format())
    }
}

impl From<NaiveDate> for AsOfDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// The three legal documents the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Shipping and return policy
    ReturnPolicy,
    /// Privacy policy
    PrivacyPolicy,
    /// Terms of service
    TermsConditions,
}

impl DocumentKind {
    /// All document kinds, in display order.
    pub const ALL: [DocumentKind; 3] = [
        Self::ReturnPolicy,
        Self::PrivacyPolicy,
        Self::TermsConditions,
    ];

    /// Default display title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::ReturnPolicy => "Shipping and Return Policy",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::TermsConditions => "Terms and Conditions",
        }
    }

    /// Stable snake_case identifier, as used in config keys.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ReturnPolicy => "return_policy",
            Self::PrivacyPolicy => "privacy_policy",
            Self::TermsConditions => "terms_conditions",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A fully substituted document ready for display or download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Which template produced this document
    pub kind: DocumentKind,
    /// Display title
    pub title: String,
    /// Markdown body with every placeholder resolved
    pub body: String,
}

impl RenderedDocument {
    /// Create a document titled with the kind's default title.
    #[must_use]
    pub fn new(kind: DocumentKind, body: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            body,
        }
    }

    /// Replace the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
