//! Strict `{placeholder}` substitution.
//!
//! A placeholder is `{` followed by one or more `[a-z_]` characters and `}`.
//! A brace not followed by a name is literal text. A brace followed by a name
//! that is never closed is an error, as is a name with no supplied value.

use crate::error::{Result, TemplateError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// Group 1 is the name, group 2 the closing brace if present.
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]*)(\}?)").expect("Token regex should be valid"));

/// Substitutes `{name}` placeholders in `template` with `values`.
///
/// The template is scanned once; substituted values are emitted verbatim and
/// never rescanned. Either every placeholder is resolved or an error is
/// returned.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for caps in TOKEN_REGEX.captures_iter(template) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let closed = caps.get(2).is_some_and(|m| !m.as_str().is_empty());

        if name.as_str().is_empty() {
            // Lone brace: literal text.
            continue;
        }
        if !closed {
            return Err(TemplateError::Unterminated {
                offset: token.start(),
            });
        }

        let value = values
            .get(name.as_str())
            .ok_or_else(|| TemplateError::MissingValue {
                placeholder: name.as_str().to_string(),
            })?;

        output.push_str(&template[last..token.start()]);
        output.push_str(value);
        last = token.end();
    }

    output.push_str(&template[last..]);
    Ok(output)
}

/// Distinct placeholder names referenced by `template`, in first-use order.
#[must_use]
pub fn placeholders_in(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in TOKEN_REGEX.captures_iter(template) {
        let closed = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if closed && !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
