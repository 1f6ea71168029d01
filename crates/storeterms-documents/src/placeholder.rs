//! The closed set of placeholder names templates may reference.

use std::collections::HashMap;
use std::fmt;
use storeterms_core::{AsOfDate, MerchantProfile};

/// A named slot in a template, written `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Long-form "as of" date
    LastUpdated,
    /// Company name
    MerchantName,
    /// Company contact email
    ContactEmail,
    /// Bare website domain
    WebsiteUrl,
    /// Governing jurisdiction
    Jurisdiction,
    /// Privacy compliance email
    PrivacyEmail,
    /// Refund window as a decimal day count
    RefundWindowDays,
}

impl Placeholder {
    /// Every placeholder.
    pub const ALL: [Placeholder; 7] = [
        Self::LastUpdated,
        Self::MerchantName,
        Self::ContactEmail,
        Self::WebsiteUrl,
        Self::Jurisdiction,
        Self::PrivacyEmail,
        Self::RefundWindowDays,
    ];

    /// Name as written between the braces.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LastUpdated => "last_updated",
            Self::MerchantName => "merchant_name",
            Self::ContactEmail => "contact_email",
            Self::WebsiteUrl => "website_url",
            Self::Jurisdiction => "jurisdiction",
            Self::PrivacyEmail => "privacy_email",
            Self::RefundWindowDays => "refund_window_days",
        }
    }

    /// Look up a placeholder by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Value this placeholder takes for `profile` as of `as_of`.
    #[must_use]
    pub fn value(&self, profile: &MerchantProfile, as_of: AsOfDate) -> String {
        match self {
            Self::LastUpdated => as_of.long_format(),
            Self::MerchantName => profile.name().to_string(),
            Self::ContactEmail => profile.contact_email().to_string(),
            Self::WebsiteUrl => profile.website_url().to_string(),
            Self::Jurisdiction => profile.jurisdiction().to_string(),
            Self::PrivacyEmail => profile.privacy_email().to_string(),
            Self::RefundWindowDays => profile.refund_window().to_string(),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Substitution values for every placeholder.
#[must_use]
pub fn placeholder_values(profile: &MerchantProfile, as_of: AsOfDate) -> HashMap<String, String> {
    Placeholder::ALL
        .into_iter()
        .map(|p| (p.name().to_string(), p.value(profile, as_of)))
        .collect()
}
