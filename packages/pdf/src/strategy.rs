//! The [`TextStrategy`] seam between the extractor and PDF libraries.

use crate::FailureCause;

/// One way of turning PDF bytes into plain text.
///
/// Implementations must not panic out of [`TextStrategy::extract`];
/// library panics are caught and reported as a [`StrategyError`].
pub trait TextStrategy: Send + Sync {
    /// Short identifier used in logs and failure details.
    fn name(&self) -> &'static str;

    /// Extracts the text of the first `max_pages` pages of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError`] if the library cannot parse or decode the
    /// document.
    fn extract(&self, bytes: &[u8], max_pages: usize) -> Result<String, StrategyError>;
}

/// A single strategy's failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{cause}: {message}")]
pub struct StrategyError {
    /// Classified cause.
    pub cause: FailureCause,
    /// Library error message.
    pub message: String,
}

impl StrategyError {
    /// Creates an error with an explicit cause.
    #[must_use]
    pub fn new(cause: FailureCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// Creates an error whose cause is inferred from a library message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            cause: classify(&message),
            message,
        }
    }
}

/// Infers a [`FailureCause`] from a PDF library error message.
///
/// Neither library exposes a dedicated encryption error variant across
/// versions, so the message text is inspected.
#[must_use]
pub fn classify(message: &str) -> FailureCause {
    let lower = message.to_ascii_lowercase();
    if ["encrypt", "decrypt", "password"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        FailureCause::Encrypted
    } else {
        FailureCause::Corrupt
    }
}

/// Joins per-page text, skipping blank pages.
pub(crate) fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .filter(|page| !page.as_ref().trim().is_empty())
        .map(|page| page.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
