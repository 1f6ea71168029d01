//! Process-wide template constants.
//!
//! Template text lives in `templates/*.md` and is embedded at compile time.
//! There is no mutation path.

use crate::placeholder::Placeholder;
use crate::substitute::placeholders_in;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use storeterms_core::DocumentKind;

/// A fixed document template.
#[derive(Debug, PartialEq, Eq)]
pub struct DocumentTemplate {
    kind: DocumentKind,
    body: &'static str,
}

/// Shipping and return policy. Does not reference the merchant name.
pub static RETURN_POLICY: DocumentTemplate = DocumentTemplate {
    kind: DocumentKind::ReturnPolicy,
    body: include_str!("../templates/return_policy.md"),
};

/// Privacy policy.
pub static PRIVACY_POLICY: DocumentTemplate = DocumentTemplate {
    kind: DocumentKind::PrivacyPolicy,
    body: include_str!("../templates/privacy_policy.md"),
};

/// Terms of service.
pub static TERMS_CONDITIONS: DocumentTemplate = DocumentTemplate {
    kind: DocumentKind::TermsConditions,
    body: include_str!("../templates/terms_conditions.md"),
};

static PLACEHOLDERS: Lazy<HashMap<DocumentKind, Vec<Placeholder>>> = Lazy::new(|| {
    DocumentKind::ALL
        .into_iter()
        .map(|kind| {
            let names = placeholders_in(DocumentTemplate::for_kind(kind).body)
                .into_iter()
                .filter_map(Placeholder::from_name)
                .collect();
            (kind, names)
        })
        .collect()
});

impl DocumentTemplate {
    /// The template for `kind`.
    #[must_use]
    pub fn for_kind(kind: DocumentKind) -> &'static DocumentTemplate {
        match kind {
            DocumentKind::ReturnPolicy => &RETURN_POLICY,
            DocumentKind::PrivacyPolicy => &PRIVACY_POLICY,
            DocumentKind::TermsConditions => &TERMS_CONDITIONS,
        }
    }

    /// Which document this template produces.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Raw template text.
    #[must_use]
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Known placeholders this template references, in first-use order.
    #[must_use]
    pub fn placeholders(&self) -> &'static [Placeholder] {
        PLACEHOLDERS
            .get(&self.kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
