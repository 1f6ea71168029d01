//! Storeterms Core - Foundation crate for the store terms generator.
//!
//! This crate provides the shared types, input validation, error handling and
//! configuration management that the renderer, delivery and CLI crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Validation and configuration errors using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`RefundWindow`, `AsOfDate`, `DocumentKind`, `RenderedDocument`)
//! - [`profile`] - Merchant profile input and required-field validation
//!
//! # Example
//!
//! ```rust
//! use storeterms_core::{DocumentKind, ProfileInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = ProfileInput {
//!     name: "Acme".to_string(),
//!     contact_email: "a@acme.com".to_string(),
//!     website_url: "acme.com".to_string(),
//!     jurisdiction: "Dehradun, Uttarakhand".to_string(),
//!     privacy_email: "p@acme.com".to_string(),
//!     refund_window_days: Some(10),
//! };
//! let profile = input.validate()?;
//! assert_eq!(profile.refund_window().days(), 10);
//! assert_eq!(DocumentKind::ReturnPolicy.title(), "Shipping and Return Policy");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod profile;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DefaultsConfig, DocumentsConfig, OutputConfig};
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use profile::{MerchantProfile, ProfileInput};
pub use types::{AsOfDate, DocumentKind, RefundWindow, RenderedDocument};
