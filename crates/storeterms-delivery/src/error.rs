//! Error types for delivery.

use thiserror::Error;

/// Errors that can occur while delivering rendered documents.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Title produces a file name that is empty or escapes the output directory
    #[error("cannot derive a safe file name from title '{title}'")]
    InvalidFileName {
        /// Offending title
        title: String,
    },

    /// Failed to write a file
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for delivery operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;
