//! Progress hooks for [`crate::Orchestrator::process_batch`].
//!
//! The batch crate never touches the terminal; the binary plugs in an
//! `indicatif` bar from `resume_extract_cli_utils`.

use std::sync::Arc;

/// Receives updates while a batch of resumes is processed.
pub trait ProgressCallback: Send + Sync {
    /// Called once with the number of PDFs about to be processed.
    fn set_total(&self, total: u64);

    /// Called after each file, successful or not.
    fn inc(&self, delta: u64);

    /// Names the file just processed.
    fn set_message(&self, msg: String);

    /// Called with the success/failure tally when the batch ends.
    fn finish(&self, msg: String);
}

/// Discards every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// [`NullProgress`] behind the `Arc` that `process_batch` takes.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
