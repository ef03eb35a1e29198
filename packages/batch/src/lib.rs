#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch processing of a folder of PDF resumes.
//!
//! Files are discovered by [`scan::scan_pdf_files`], processed strictly
//! one at a time by [`orchestrator::Orchestrator`], and written out by
//! [`export::export_csv`]. Per-document problems never abort a batch:
//! they become sentinel-filled records plus an entry in
//! [`resume_extract_models::BatchSummary::failed_entries`]. Only folder
//! and output-file problems are returned as errors.

pub mod export;
pub mod orchestrator;
pub mod progress;
pub mod scan;

use std::path::Path;
use std::sync::Arc;

pub use export::{ExportError, export_csv, write_summary_json};
pub use orchestrator::{BatchReport, Orchestrator, ProcessedFile};
pub use progress::{NullProgress, ProgressCallback, null_progress};
pub use scan::{ScanError, scan_pdf_files};

/// Scans `dir` and processes every PDF found.
///
/// # Errors
///
/// Returns [`ScanError`] if the folder cannot be created or read.
pub fn process_folder(
    dir: &Path,
    orchestrator: &Orchestrator,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<BatchReport, ScanError> {
    let paths = scan_pdf_files(dir)?;

    log::info!("Found {} PDF file(s) in {}", paths.len(), dir.display());

    Ok(orchestrator.process_batch(&paths, progress))
}

#[cfg(test)]
mod tests {
    use resume_extract_pdf::fixture;

    use super::*;

    #[test]
    fn processes_folder_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("good.pdf"),
            fixture::pdf_with_pages(&["Contact: 13812345678, email: a.b@test.com"]),
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").unwrap();

        let report =
            process_folder(dir.path(), &Orchestrator::default(), &null_progress()).unwrap();

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.succeeded, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.records[0].source_name, "broken.pdf");
        assert_eq!(report.summary.failed_entries[0].reason, "corrupt");
        assert_eq!(report.records[1].phone, "13812345678");
        assert_eq!(report.records[1].email, "a.b@test.com");
    }
}
