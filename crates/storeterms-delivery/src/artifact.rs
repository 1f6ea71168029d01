//! Downloadable artifacts.

use crate::error::{DeliveryError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use storeterms_core::RenderedDocument;
use tracing::debug;

/// Extension appended to every derived file name.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Derive a download file name from a display title.
///
/// Lower-cased, spaces replaced with underscores, `.md` appended:
/// `"Shipping and Return Policy"` becomes `"shipping_and_return_policy.md"`.
#[must_use]
pub fn file_name_for(title: &str) -> String {
    format!(
        "{}.{MARKDOWN_EXTENSION}",
        title.to_lowercase().replace(' ', "_")
    )
}

/// A rendered document packaged for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    title: String,
    file_name: String,
    body: String,
}

impl Artifact {
    /// Package a rendered document.
    ///
    /// # Errors
    /// Returns error if the title cannot produce a file name that stays
    /// inside an output directory.
    pub fn from_document(doc: &RenderedDocument) -> Result<Self> {
        let stem = doc.title.trim();
        if stem.is_empty() || stem.starts_with('.') || stem.contains(['/', '\\']) {
            return Err(DeliveryError::InvalidFileName {
                title: doc.title.clone(),
            });
        }

        Ok(Self {
            title: doc.title.clone(),
            file_name: file_name_for(&doc.title),
            body: doc.body.clone(),
        })
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Derived file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File contents: the UTF-8 encoded body.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// `data:` URI carrying the bytes in standard base64.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:file/markdown;base64,{}", STANDARD.encode(self.bytes()))
    }

    /// HTML anchor that downloads the artifact under its file name.
    #[must_use]
    pub fn download_link(&self) -> String {
        format!(
            r#"<a href="{}" download="{}" class="download-button">Download {}</a>"#,
            self.data_uri(),
            self.file_name,
            self.title
        )
    }

    /// Write the bytes to `dir/<file_name>`, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, self.bytes()).map_err(|source| DeliveryError::Write {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            path = %path.display(),
            bytes = self.body.len(),
            "wrote document"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeterms_core::DocumentKind;
    use tempfile::TempDir;

    fn doc(title: &str, body: &str) -> RenderedDocument {
        RenderedDocument::new(DocumentKind::ReturnPolicy, body.to_string()).with_title(title)
    }

    #[test]
    fn test_file_name_for() {
        assert_eq!(
            file_name_for("Shipping and Return Policy"),
            "shipping_and_return_policy.md"
        );
        assert_eq!(file_name_for("Privacy Policy"), "privacy_policy.md");
        assert_eq!(file_name_for("Terms and Conditions"), "terms_and_conditions.md");
    }

    #[test]
    fn test_bytes_equal_body() {
        let body = "**Shipping and Return Policy**\n\nCafé ₹5000";
        let artifact = Artifact::from_document(&doc("Shipping and Return Policy", body))
            .expect("package");
        assert_eq!(artifact.bytes(), body.as_bytes());
        assert_eq!(artifact.text(), body);
        assert_eq!(artifact.file_name(), "shipping_and_return_policy.md");
    }

    #[test]
    fn test_data_uri() {
        let artifact = Artifact::from_document(&doc("Privacy Policy", "hello")).expect("package");
        assert_eq!(artifact.data_uri(), "data:file/markdown;base64,aGVsbG8=");
    }

    #[test]
    fn test_download_link() {
        let artifact = Artifact::from_document(&doc("Privacy Policy", "hello")).expect("package");
        assert_eq!(
            artifact.download_link(),
            r#"<a href="data:file/markdown;base64,aGVsbG8=" download="privacy_policy.md" class="download-button">Download Privacy Policy</a>"#
        );
    }

    #[test]
    fn test_unsafe_titles_rejected() {
        for title in ["", "   ", "../etc", "a/b", "a\\b", ".hidden"] {
            let err = Artifact::from_document(&doc(title, "x")).expect_err("unsafe title");
            assert!(matches!(err, DeliveryError::InvalidFileName { .. }));
        }
    }

    #[test]
    fn test_write_to_creates_directory() {
        let tmp = TempDir::new().expect("create temp dir");
        let out = tmp.path().join("nested").join("out");
        let artifact =
            Artifact::from_document(&doc("Terms and Conditions", "terms body")).expect("package");

        let path = artifact.write_to(&out).expect("write artifact");
        assert_eq!(path, out.join("terms_and_conditions.md"));
        assert_eq!(fs::read(&path).expect("read back"), b"terms body");
    }
}
