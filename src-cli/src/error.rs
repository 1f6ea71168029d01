//! Error types for command output.

use serde::Serialize;
use storeterms_core::{ConfigError, ValidationError};
use storeterms_delivery::DeliveryError;
use storeterms_documents::TemplateError;

/// Serializable error for `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandError {
    /// Error code for scripted handling (e.g., "MISSING_REQUIRED_FIELD")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&ValidationError> for CommandError {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::MissingField { field } => Self::with_details(
                "MISSING_REQUIRED_FIELD",
                "Please fill in all required fields.",
                serde_json::json!({ "field": field }),
            ),
            ValidationError::RefundWindowOutOfRange { value, min, max } => Self::with_details(
                "REFUND_WINDOW_OUT_OF_RANGE",
                err.to_string(),
                serde_json::json!({ "value": value, "min": min, "max": max }),
            ),
            ValidationError::InvalidDate { value } => Self::with_details(
                "INVALID_DATE",
                err.to_string(),
                serde_json::json!({ "value": value }),
            ),
        }
    }
}

impl From<&TemplateError> for CommandError {
    fn from(err: &TemplateError) -> Self {
        match err {
            TemplateError::MissingValue { placeholder } => Self::with_details(
                "TEMPLATE_SUBSTITUTION_FAILED",
                err.to_string(),
                serde_json::json!({ "placeholder": placeholder }),
            ),
            TemplateError::Unterminated { offset } => Self::with_details(
                "TEMPLATE_SUBSTITUTION_FAILED",
                err.to_string(),
                serde_json::json!({ "offset": offset }),
            ),
        }
    }
}

impl From<&DeliveryError> for CommandError {
    fn from(err: &DeliveryError) -> Self {
        match err {
            DeliveryError::InvalidFileName { title } => Self::with_details(
                "INVALID_FILE_NAME",
                err.to_string(),
                serde_json::json!({ "title": title }),
            ),
            DeliveryError::Write { path, .. } => Self::with_details(
                "FILESYSTEM_ERROR",
                err.to_string(),
                serde_json::json!({ "path": path }),
            ),
            DeliveryError::Io(_) => Self::new("FILESYSTEM_ERROR", err.to_string()),
        }
    }
}

impl From<&ConfigError> for CommandError {
    fn from(err: &ConfigError) -> Self {
        Self::new("CONFIG_ERROR", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_new() {
        let err = CommandError::new("TEST_CODE", "Test message");
        assert_eq!(err.code, "TEST_CODE");
        assert_eq!(err.message, "Test message");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_missing_field_conversion() {
        let err: CommandError = (&ValidationError::MissingField {
            field: "Jurisdiction",
        })
            .into();
        assert_eq!(err.code, "MISSING_REQUIRED_FIELD");
        assert_eq!(err.message, "Please fill in all required fields.");
        assert_eq!(
            err.details,
            Some(serde_json::json!({ "field": "Jurisdiction" }))
        );
    }

    #[test]
    fn test_template_error_conversion() {
        let err: CommandError = (&TemplateError::MissingValue {
            placeholder: "website_url".to_string(),
        })
            .into();
        assert_eq!(err.code, "TEMPLATE_SUBSTITUTION_FAILED");
        assert!(err.message.contains("{website_url}"));
    }

    #[test]
    fn test_delivery_error_conversion() {
        let err: CommandError = (&DeliveryError::InvalidFileName {
            title: "../x".to_string(),
        })
            .into();
        assert_eq!(err.code, "INVALID_FILE_NAME");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CommandError = (&ConfigError::InvalidValue {
            field: "defaults.refund_window_days".to_string(),
            reason: "out of range".to_string(),
        })
            .into();
        assert_eq!(err.code, "CONFIG_ERROR");
        assert!(err.message.contains("defaults.refund_window_days"));
    }

    #[test]
    fn test_error_serialization() {
        let err = CommandError::new("TEST_CODE", "Test message");
        let json = serde_json::to_string(&err).expect("serialize error");
        assert_eq!(json, r#"{"code":"TEST_CODE","message":"Test message"}"#);
    }
}
