//! Fallback strategy that walks page content streams with [`lopdf`].

use lopdf::Document;

use crate::FailureCause;
use crate::strategy::{StrategyError, TextStrategy, join_pages};

/// Extracts text page by page with `lopdf`.
///
/// Only the requested pages are decoded, and a page that fails to decode
/// is skipped rather than failing the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfText;

impl TextStrategy for LopdfText {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, bytes: &[u8], max_pages: usize) -> Result<String, StrategyError> {
        let mut document = Document::load_mem(bytes)
            .map_err(|e| StrategyError::from_message(format!("failed to load PDF: {e}")))?;

        // Owner-password-only documents open with an empty user password.
        if document.is_encrypted() && document.decrypt("").is_err() {
            return Err(StrategyError::new(
                FailureCause::Encrypted,
                "document is password-protected",
            ));
        }

        let page_numbers: Vec<u32> = document
            .get_pages()
            .keys()
            .copied()
            .take(max_pages)
            .collect();

        if page_numbers.is_empty() {
            return Err(StrategyError::new(
                FailureCause::Corrupt,
                "document has no pages",
            ));
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut last_error = None;

        for page in page_numbers {
            match document.extract_text(&[page]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    log::debug!("lopdf could not decode page {page}: {e}");
                    last_error = Some(e);
                }
            }
        }

        if pages.is_empty()
            && let Some(e) = last_error
        {
            return Err(StrategyError::from_message(e.to_string()));
        }

        Ok(join_pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn reads_only_leading_pages() {
        let bytes = fixture::pdf_with_pages(&["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO"]);
        let text = LopdfText.extract(&bytes, 3).unwrap();
        assert!(text.contains("ALPHA"));
        assert!(text.contains("CHARLIE"));
        assert!(!text.contains("DELTA"));
        assert!(!text.contains("ECHO"));
    }

    #[test]
    fn skips_broken_leading_page() {
        let bytes = fixture::pdf_with_broken_page(&["ALPHA", "BRAVO"], 0);
        let text = LopdfText.extract(&bytes, 3).unwrap();
        assert!(text.contains("ALPHA"));
        assert!(text.contains("BRAVO"));
    }

    #[test]
    fn reports_encrypted_documents() {
        let err = LopdfText
            .extract(&fixture::encrypted_pdf(&["secret"]), 3)
            .unwrap_err();
        assert_eq!(err.cause, FailureCause::Encrypted);
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = LopdfText.extract(b"garbage", 3).unwrap_err();
        assert_eq!(err.cause, FailureCause::Corrupt);
    }
}
