//! Core error types for storeterms.
//!
//! Validation and configuration errors. Rendering and delivery errors live in
//! their own crates.

use thiserror::Error;

/// Errors raised while validating merchant input.
///
/// Validation runs before any document is rendered; a failure means nothing
/// is produced and the caller must re-prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only
    #[error("missing required field: {field}")]
    MissingField {
        /// Human-readable field label
        field: &'static str,
    },

    /// Refund window outside the accepted range
    #[error("refund window must be between {min} and {max} days, got {value}")]
    RefundWindowOutOfRange {
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u8,
        /// Largest accepted value
        max: u8,
    },

    /// Date string that could not be parsed
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Rejected input
        value: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config or profile file not found
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where the file was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::MissingField {
            field: "Jurisdiction",
        };
        assert_eq!(err.to_string(), "missing required field: Jurisdiction");

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "could not determine config directory (XDG base directories not available)"
        );
    }

    #[test]
    fn test_refund_window_error_display() {
        let err = ValidationError::RefundWindowOutOfRange {
            value: 31,
            min: 1,
            max: 30,
        };
        assert_eq!(
            err.to_string(),
            "refund window must be between 1 and 30 days, got 31"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: test");
    }
}
