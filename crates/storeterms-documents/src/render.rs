//! Document rendering.
//!
//! One operation per document kind. All three are pure: no I/O, no clock, no
//! hidden state. The caller supplies the "as of" date.

use crate::error::Result;
use crate::placeholder::placeholder_values;
use crate::substitute::substitute;
use crate::template::DocumentTemplate;
use storeterms_core::{AsOfDate, DocumentKind, MerchantProfile, RenderedDocument};
use tracing::debug;

/// Render the shipping and return policy.
pub fn render_return_policy(profile: &MerchantProfile, as_of: AsOfDate) -> Result<RenderedDocument> {
    render(DocumentKind::ReturnPolicy, profile, as_of)
}

/// Render the privacy policy.
pub fn render_privacy_policy(
    profile: &MerchantProfile,
    as_of: AsOfDate,
) -> Result<RenderedDocument> {
    render(DocumentKind::PrivacyPolicy, profile, as_of)
}

/// Render the terms and conditions.
pub fn render_terms_conditions(
    profile: &MerchantProfile,
    as_of: AsOfDate,
) -> Result<RenderedDocument> {
    render(DocumentKind::TermsConditions, profile, as_of)
}

/// Render the document for `kind`, titled with the kind's default title.
///
/// # Errors
/// Returns [`TemplateError`](crate::TemplateError) if a placeholder cannot be
/// resolved. No partial document is produced.
pub fn render(
    kind: DocumentKind,
    profile: &MerchantProfile,
    as_of: AsOfDate,
) -> Result<RenderedDocument> {
    let template = DocumentTemplate::for_kind(kind);
    let values = placeholder_values(profile, as_of);
    let body = substitute(template.body(), &values)?;

    debug!(
        kind = kind.slug(),
        as_of = %as_of,
        bytes = body.len(),
        "rendered document"
    );

    Ok(RenderedDocument::new(kind, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeterms_core::ProfileInput;

    fn profile(days: u32) -> MerchantProfile {
        ProfileInput {
            name: "Acme".to_string(),
            contact_email: "a@acme.com".to_string(),
            website_url: "acme.com".to_string(),
            jurisdiction: "Dehradun, Uttarakhand".to_string(),
            privacy_email: "p@acme.com".to_string(),
            refund_window_days: Some(days),
        }
        .validate()
        .expect("valid profile")
    }

    fn date() -> AsOfDate {
        AsOfDate::parse("2025-01-05").expect("parse date")
    }

    #[test]
    fn test_render_titles() {
        let p = profile(10);
        assert_eq!(
            render_return_policy(&p, date()).expect("render").title,
            "Shipping and Return Policy"
        );
        assert_eq!(
            render_privacy_policy(&p, date()).expect("render").title,
            "Privacy Policy"
        );
        assert_eq!(
            render_terms_conditions(&p, date()).expect("render").title,
            "Terms and Conditions"
        );
    }

    #[test]
    fn test_last_updated_line() {
        let p = profile(10);
        for kind in DocumentKind::ALL {
            let doc = render(kind, &p, date()).expect("render");
            assert!(
                doc.body.contains("**Last Updated:** January 05, 2025"),
                "{kind} is missing the date"
            );
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let p = profile(12);
        for kind in DocumentKind::ALL {
            let first = render(kind, &p, date()).expect("render");
            let second = render(kind, &p, date()).expect("render");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_return_policy_does_not_use_merchant_name() {
        let doc = render_return_policy(&profile(10), date()).expect("render");
        assert!(!doc.body.contains("Acme"));
    }
}
