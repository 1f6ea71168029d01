//! The generated page: every selected document with a collapsed view and a
//! download link.

use crate::artifact::Artifact;
use crate::error::{DeliveryError, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name the page is written under.
pub const PAGE_FILE_NAME: &str = "storeterms.md";

const PAGE_TITLE: &str = "Store Terms Generator";

const NOTICES: [&str; 2] = [
    "These terms are templates and should be reviewed by a legal professional before use.",
    "These terms have been made around Razorpay and Shopify, if you are using any other payment gateway or ecommerce service, please change the terms accordingly.",
];

/// Markdown page presenting a set of artifacts.
#[derive(Debug, Clone, Default)]
pub struct Page {
    artifacts: Vec<Artifact>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document section.
    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    /// Sections in insertion order.
    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Whether the page has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Render the page as Markdown with inline HTML.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("# {PAGE_TITLE}\n\n");
        for notice in NOTICES {
            let _ = writeln!(out, "{notice}\n");
        }

        for artifact in &self.artifacts {
            let _ = write!(
                out,
                "## {title}\n\n\
                 <details>\n<summary>View Document</summary>\n\n\
                 {body}\n\n\
                 </details>\n\n\
                 {link}\n\n\
                 ---\n\n",
                title = artifact.title(),
                body = artifact.text(),
                link = artifact.download_link(),
            );
        }

        out
    }

    /// Write the rendered page to `dir/storeterms.md`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(PAGE_FILE_NAME);
        fs::write(&path, self.render()).map_err(|source| DeliveryError::Write {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            path = %path.display(),
            documents = self.artifacts.len(),
            "wrote page"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeterms_core::{DocumentKind, RenderedDocument};
    use tempfile::TempDir;

    fn artifact(kind: DocumentKind, body: &str) -> Artifact {
        Artifact::from_document(&RenderedDocument::new(kind, body.to_string())).expect("package")
    }

    #[test]
    fn test_empty_page_has_header_and_notices() {
        let page = Page::new();
        assert!(page.is_empty());
        let text = page.render();
        assert!(text.starts_with("# Store Terms Generator\n"));
        assert!(text.contains("reviewed by a legal professional"));
        assert!(text.contains("Razorpay and Shopify"));
        assert!(!text.contains("<details>"));
    }

    #[test]
    fn test_sections_in_order() {
        let mut page = Page::new();
        page.push(artifact(DocumentKind::PrivacyPolicy, "privacy body"));
        page.push(artifact(DocumentKind::TermsConditions, "terms body"));
        let text = page.render();

        let privacy = text.find("## Privacy Policy").expect("privacy heading");
        let terms = text.find("## Terms and Conditions").expect("terms heading");
        assert!(privacy < terms);
        assert_eq!(text.matches("<summary>View Document</summary>").count(), 2);
        assert!(text.contains("privacy body"));
        assert!(text.contains(r#"download="terms_and_conditions.md""#));
        assert_eq!(text.matches("\n---\n").count(), 2);
    }

    #[test]
    fn test_write_to() {
        let tmp = TempDir::new().expect("create temp dir");
        let mut page = Page::new();
        page.push(artifact(DocumentKind::ReturnPolicy, "returns body"));

        let path = page.write_to(tmp.path()).expect("write page");
        assert_eq!(path, tmp.path().join("storeterms.md"));
        let written = fs::read_to_string(path).expect("read page");
        assert_eq!(written, page.render());
    }
}
