//! Storeterms Documents - the three legal document templates and their renderer.
//!
//! Each document kind is an independent, fixed Markdown template embedded at
//! compile time. Rendering is literal `{placeholder}` substitution of merchant
//! profile values and the "last updated" date: pure, total over valid input,
//! and closed on failure (no partially substituted text ever escapes).
//!
//! # Architecture
//!
//! - **Placeholders** ([`placeholder`]): The closed set of names a template may reference
//! - **Substitution** ([`substitute`]): Single-pass strict replacement
//! - **Templates** ([`template`]): Process-wide template constants
//! - **Rendering** ([`render`]): One operation per document kind plus a dispatcher
//! - **Errors** ([`error`]): Substitution failures
//!
//! # Example
//!
//! ```rust
//! use storeterms_core::{AsOfDate, ProfileInput};
//! use storeterms_documents::render_return_policy;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = ProfileInput {
//!     name: "Acme".to_string(),
//!     contact_email: "a@acme.com".to_string(),
//!     website_url: "acme.com".to_string(),
//!     jurisdiction: "Dehradun, Uttarakhand".to_string(),
//!     privacy_email: "p@acme.com".to_string(),
//!     refund_window_days: Some(10),
//! }
//! .validate()?;
//!
//! let doc = render_return_policy(&profile, AsOfDate::parse("2025-01-05")?)?;
//! assert!(doc.body.starts_with("**Shipping and Return Policy**"));
//! assert!(doc.body.contains("lasts 10 days"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod placeholder;
pub mod render;
pub mod substitute;
pub mod template;

pub use error::{Result, TemplateError};
pub use placeholder::{placeholder_values, Placeholder};
pub use render::{render, render_privacy_policy, render_return_policy, render_terms_conditions};
pub use substitute::{placeholders_in, substitute};
pub use template::DocumentTemplate;
