#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text acquisition for resume extraction.
//!
//! Resumes put identifying information on the first pages, so only the
//! first [`DEFAULT_MAX_PAGES`] pages are read. Text is obtained by trying
//! an ordered list of [`TextStrategy`] implementations: pure-Rust
//! [`pdf_extract`] first, then a plain [`lopdf`] content-stream walk. The
//! first strategy that returns non-blank text wins. When every strategy
//! fails, a single [`TextAcquisitionFailure`] is returned whose
//! [`FailureCause`] is the most specific cause any strategy reported.

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;
pub mod lopdf_text;
pub mod pdf_extract_text;
pub mod strategy;

use std::path::Path;

use strum_macros::Display;

pub use lopdf_text::LopdfText;
pub use pdf_extract_text::PdfExtractText;
pub use strategy::{StrategyError, TextStrategy};

/// Number of leading pages read from each document.
pub const DEFAULT_MAX_PAGES: usize = 3;

/// Why text could not be obtained from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FailureCause {
    /// The document is password-protected.
    Encrypted,
    /// The file could not be read from disk.
    Unreadable,
    /// The document parsed but carries no extractable text (e.g. a scan).
    #[strum(serialize = "no text layer")]
    NoTextLayer,
    /// The document structure is malformed.
    Corrupt,
}

impl FailureCause {
    /// Ranks causes so the most informative one survives aggregation.
    const fn specificity(self) -> u8 {
        match self {
            Self::Encrypted => 3,
            Self::Unreadable => 2,
            Self::NoTextLayer => 1,
            Self::Corrupt => 0,
        }
    }
}

/// Every configured strategy failed to produce text for a document.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{cause}: {detail}")]
pub struct TextAcquisitionFailure {
    /// Classified cause, suitable for showing to the user.
    pub cause: FailureCause,
    /// Library-level detail for each attempted strategy.
    pub detail: String,
}

impl TextAcquisitionFailure {
    fn unreadable(path: &Path, error: &std::io::Error) -> Self {
        Self {
            cause: FailureCause::Unreadable,
            detail: format!("failed to read {}: {error}", path.display()),
        }
    }
}

/// Extracts text from PDFs by trying strategies in order.
pub struct TextExtractor {
    strategies: Vec<Box<dyn TextStrategy>>,
    max_pages: usize,
}

impl std::fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExtractor")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// Creates an extractor using `pdf-extract` with a `lopdf` fallback,
    /// reading the first [`DEFAULT_MAX_PAGES`] pages.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategies(
            vec![Box::new(PdfExtractText), Box::new(LopdfText)],
            DEFAULT_MAX_PAGES,
        )
    }

    /// Creates an extractor with a custom, ordered strategy list.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn TextStrategy>>, max_pages: usize) -> Self {
        Self {
            strategies,
            max_pages: max_pages.max(1),
        }
    }

    /// Sets how many leading pages are read (at least one).
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Returns the configured page limit.
    #[must_use]
    pub const fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Reads the file at `path` and extracts text from its first pages.
    ///
    /// The file is read into memory once and closed before any strategy
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns [`TextAcquisitionFailure`] if the file cannot be read or if
    /// every strategy fails.
    pub fn extract_text(&self, path: &Path) -> Result<String, TextAcquisitionFailure> {
        let bytes =
            std::fs::read(path).map_err(|e| TextAcquisitionFailure::unreadable(path, &e))?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        self.extract_text_from_mem(&bytes)
    }

    /// Extracts text from an in-memory PDF.
    ///
    /// # Errors
    ///
    /// Returns [`TextAcquisitionFailure`] if every strategy fails or
    /// returns blank text.
    pub fn extract_text_from_mem(&self, bytes: &[u8]) -> Result<String, TextAcquisitionFailure> {
        let mut errors: Vec<(&'static str, StrategyError)> = Vec::new();

        for strategy in &self.strategies {
            let error = match strategy.extract(bytes, self.max_pages) {
                Ok(text) if !text.trim().is_empty() => {
                    log::debug!(
                        "{} extracted {} characters",
                        strategy.name(),
                        text.chars().count()
                    );
                    return Ok(text);
                }
                Ok(_) => StrategyError::new(FailureCause::NoTextLayer, "no text extracted"),
                Err(e) => e,
            };

            log::warn!("{} failed ({error}), trying next strategy", strategy.name());
            errors.push((strategy.name(), error));
        }

        Err(aggregate(&errors))
    }
}

fn aggregate(errors: &[(&'static str, StrategyError)]) -> TextAcquisitionFailure {
    let Some(cause) = errors
        .iter()
        .map(|(_, e)| e.cause)
        .max_by_key(|c| c.specificity())
    else {
        return TextAcquisitionFailure {
            cause: FailureCause::Unreadable,
            detail: "no extraction strategies configured".to_owned(),
        };
    };

    let detail = errors
        .iter()
        .map(|(name, e)| format!("{name}: {}", e.message))
        .collect::<Vec<_>>()
        .join("; ");

    TextAcquisitionFailure { cause, detail }
}

/// Extracts text from the first [`DEFAULT_MAX_PAGES`] pages of the PDF at
/// `path` using the default strategies.
///
/// # Errors
///
/// Returns [`TextAcquisitionFailure`] if the text cannot be obtained.
pub fn extract_text(path: &Path) -> Result<String, TextAcquisitionFailure> {
    TextExtractor::new().extract_text(path)
}
