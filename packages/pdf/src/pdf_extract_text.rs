//! Primary strategy backed by the [`pdf_extract`] crate.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pdf_extract::{Document, PlainTextOutput};

use crate::FailureCause;
use crate::strategy::{StrategyError, TextStrategy, join_pages};

/// Extracts text with `pdf-extract`, which handles font encodings and
/// CID fonts better than a raw content-stream walk.
///
/// Pages are rendered one at a time and only the leading pages are ever
/// decoded. `pdf-extract` can panic on unusual fonts, so each page is
/// rendered inside [`panic::catch_unwind`] and a page that fails is
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractText;

impl TextStrategy for PdfExtractText {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, bytes: &[u8], max_pages: usize) -> Result<String, StrategyError> {
        let mut document = Document::load_mem(bytes)
            .map_err(|e| StrategyError::from_message(format!("failed to load PDF: {e}")))?;

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
            match render_page(&document, page) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    log::debug!("pdf-extract could not render page {page}: {e}");
                    last_error = Some(e);
                }
            }
        }

        if pages.is_empty()
            && let Some(e) = last_error
        {
            return Err(e);
        }

        log::trace!("pdf-extract rendered {} page(s)", pages.len());

        Ok(join_pages(pages))
    }
}

fn render_page(document: &Document, page: u32) -> Result<String, StrategyError> {
    let mut text = String::new();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut output = PlainTextOutput::new(&mut text);
        pdf_extract::output_doc_page(document, &mut output, page)
    }));

    match outcome {
        Ok(Ok(())) => Ok(text),
        Ok(Err(e)) => Err(StrategyError::from_message(e.to_string())),
        Err(payload) => Err(StrategyError::new(
            FailureCause::Corrupt,
            format!(
                "pdf-extract panicked on page {page}: {}",
                panic_message(payload.as_ref())
            ),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn reads_only_leading_pages() {
        let bytes = fixture::pdf_with_pages(&["ALPHA", "BRAVO", "CHARLIE", "DELTA"]);
        let text = PdfExtractText.extract(&bytes, 2).unwrap();
        assert!(text.contains("ALPHA"));
        assert!(text.contains("BRAVO"));
        assert!(!text.contains("CHARLIE"));
        assert!(!text.contains("DELTA"));
    }

    #[test]
    fn broken_page_past_the_limit_is_never_decoded() {
        let bytes = fixture::pdf_with_broken_page(&["ALPHA", "BRAVO", "CHARLIE"], 3);
        let text = PdfExtractText.extract(&bytes, 3).unwrap();
        assert!(text.contains("ALPHA"));
        assert!(text.contains("CHARLIE"));
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = PdfExtractText.extract(b"%not a pdf", 3).unwrap_err();
        assert_eq!(err.cause, FailureCause::Corrupt);
    }

    #[test]
    fn reports_encrypted_documents() {
        let err = PdfExtractText
            .extract(&fixture::encrypted_pdf(&["secret"]), 3)
            .unwrap_err();
        assert_eq!(err.cause, FailureCause::Encrypted);
    }
}
