//! Integration tests for document rendering
//!
//! Checks the rendered output of all three templates against a known
//! merchant profile.

use regex::Regex;
use storeterms_core::{AsOfDate, DocumentKind, MerchantProfile, ProfileInput};
use storeterms_documents::{
    render, render_privacy_policy, render_return_policy, render_terms_conditions,
};

fn acme_input() -> ProfileInput {
    ProfileInput {
        name: "Acme".to_string(),
        contact_email: "a@acme.com".to_string(),
        website_url: "acme.com".to_string(),
        jurisdiction: "Dehradun, Uttarakhand".to_string(),
        privacy_email: "p@acme.com".to_string(),
        refund_window_days: Some(10),
    }
}

fn acme() -> MerchantProfile {
    acme_input().validate().expect("valid profile")
}

fn as_of() -> AsOfDate {
    AsOfDate::parse("2025-01-05").expect("parse date")
}

#[test]
fn test_acme_return_policy() {
    let doc = render_return_policy(&acme(), as_of()).unwrap();
    assert!(doc.body.starts_with("**Shipping and Return Policy**"));
    assert!(doc.body.contains("lasts 10 days"));
    assert!(doc.body.contains("a@acme.com"));
}

#[test]
fn test_acme_privacy_policy() {
    let doc = render_privacy_policy(&acme(), as_of()).unwrap();
    assert!(doc.body.contains("Acme"));
    assert!(doc.body.contains("p@acme.com"));
    assert!(doc.body.contains("acme.com"));
}

#[test]
fn test_acme_terms_conditions() {
    let doc = render_terms_conditions(&acme(), as_of()).unwrap();
    assert!(doc.body.contains("Dehradun, Uttarakhand"));
    assert!(doc.body.contains("a@acme.com"));
    assert!(doc.body.contains("jurisdiction of **Dehradun, Uttarakhand**"));
}

#[test]
fn test_no_residual_placeholders() {
    let token = Regex::new(r"\{[a-z_]+\}").unwrap();
    for kind in DocumentKind::ALL {
        let doc = render(kind, &acme(), as_of()).unwrap();
        assert!(
            !token.is_match(&doc.body),
            "{kind} still contains a placeholder"
        );
        assert!(!doc.body.contains('{'), "{kind} contains an opening brace");
        assert!(!doc.body.contains('}'), "{kind} contains a closing brace");
    }
}

#[test]
fn test_rendering_is_byte_identical_across_calls() {
    let profile = acme();
    for kind in DocumentKind::ALL {
        let first = render(kind, &profile, as_of()).unwrap();
        let second = render(kind, &profile, as_of()).unwrap();
        assert_eq!(first.body.as_bytes(), second.body.as_bytes());
    }
}

#[test]
fn test_refund_window_boundaries() {
    for days in [1_u32, 30] {
        let profile = ProfileInput {
            refund_window_days: Some(days),
            ..acme_input()
        }
        .validate()
        .unwrap();

        let doc = render_return_policy(&profile, as_of()).unwrap();
        assert!(
            doc.body
                .contains(&format!("Our returns and refunds policy lasts {days} days.")),
            "lasts clause for {days}"
        );
        assert!(
            doc.body.contains(&format!("if {days} days have gone by")),
            "gone-by clause for {days}"
        );
        assert!(doc
            .body
            .contains(&format!("returned more than {days} days after delivery")));
    }
}

#[test]
fn test_every_refund_reference_matches_input() {
    let profile = ProfileInput {
        refund_window_days: Some(23),
        ..acme_input()
    }
    .validate()
    .unwrap();
    let doc = render_return_policy(&profile, as_of()).unwrap();

    let refund_refs = Regex::new(r"(lasts|if|than) (\d+) days").unwrap();
    let found: Vec<&str> = refund_refs
        .captures_iter(&doc.body)
        .filter_map(|c| c.get(2).map(|m| m.as_str()))
        .collect();
    assert_eq!(found, vec!["23", "23", "23"]);
}

#[test]
fn test_values_with_braces_are_emitted_verbatim() {
    let profile = ProfileInput {
        name: "Acme {website_url}".to_string(),
        ..acme_input()
    }
    .validate()
    .unwrap();
    let doc = render_privacy_policy(&profile, as_of()).unwrap();
    assert!(doc.body.contains("**Acme {website_url}**"));
}

#[test]
fn test_date_only_changes_last_updated_line() {
    let profile = acme();
    let later = AsOfDate::parse("2026-12-31").unwrap();
    for kind in DocumentKind::ALL {
        let a = render(kind, &profile, as_of()).unwrap();
        let b = render(kind, &profile, later).unwrap();
        assert!(b.body.contains("December 31, 2026"));
        assert_eq!(
            a.body.replace("January 05, 2025", "December 31, 2026"),
            b.body
        );
    }
}

#[test]
fn test_bodies_end_with_template_text() {
    for kind in DocumentKind::ALL {
        let doc = render(kind, &acme(), as_of()).unwrap();
        assert!(!doc.body.ends_with('\n'), "{kind}: trailing newline");
    }

    let returns = render_return_policy(&acme(), as_of()).unwrap();
    assert!(returns.body.ends_with("as may be agreed upon mutually."));
    let terms = render_terms_conditions(&acme(), as_of()).unwrap();
    assert!(terms.body.ends_with("---"));
}
