//! Error types for document rendering.

use thiserror::Error;

/// Errors that can occur while substituting a template.
///
/// Any of these fails the single document being rendered; no partially
/// substituted text is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template references a placeholder that has no supplied value
    #[error("no value supplied for placeholder {{{placeholder}}}")]
    MissingValue {
        /// Placeholder name without braces
        placeholder: String,
    },

    /// A `{name` token is never closed
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening brace
        offset: usize,
    },
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::MissingValue {
            placeholder: "jurisdiction".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no value supplied for placeholder {jurisdiction}"
        );

        let err = TemplateError::Unterminated { offset: 12 };
        assert_eq!(err.to_string(), "unterminated placeholder at byte 12");
    }
}
