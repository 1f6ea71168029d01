//! Storeterms Delivery - packaging rendered documents for viewing and download.
//!
//! Delivery never re-templates: an [`Artifact`]'s bytes are exactly the UTF-8
//! encoding of the rendered body. File names are derived from the display
//! title, and a [`Page`] lays the documents out with a collapsed view and a
//! base64 download link each.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod artifact;
pub mod error;
pub mod page;

pub use artifact::{file_name_for, Artifact, MARKDOWN_EXTENSION};
pub use error::{DeliveryError, Result};
pub use page::{Page, PAGE_FILE_NAME};
