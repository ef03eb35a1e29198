//! Per-file extraction pass and the sequential batch loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use resume_extract_models::{BatchSummary, ExtractionRecord};
use resume_extract_pdf::{TextAcquisitionFailure, TextExtractor};
use serde::Serialize;

use crate::progress::ProgressCallback;

/// Outcome of processing one file.
#[derive(Debug)]
pub struct ProcessedFile {
    /// The output row, always fully populated.
    pub record: ExtractionRecord,
    /// Set when the document's text could not be obtained.
    pub failure: Option<TextAcquisitionFailure>,
}

/// Records and summary of a whole batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One record per file, in processing order.
    pub records: Vec<ExtractionRecord>,
    /// Aggregate counts and failure reasons.
    pub summary: BatchSummary,
}

/// Turns PDF paths into [`ExtractionRecord`]s.
#[derive(Debug, Default)]
pub struct Orchestrator {
    extractor: TextExtractor,
}

impl Orchestrator {
    /// Creates an orchestrator around the given text extractor.
    #[must_use]
    pub const fn new(extractor: TextExtractor) -> Self {
        Self { extractor }
    }

    /// Extracts a record from the PDF at `path`.
    ///
    /// Never fails: if the text cannot be obtained the record holds only
    /// sentinels and [`ProcessedFile::failure`] says why.
    #[must_use]
    pub fn process(&self, path: &Path) -> ProcessedFile {
        let source_name = source_name(path);

        match self.extractor.extract_text(path) {
            Ok(text) => {
                let fields = resume_extract_fields::extract_fields(&text, &source_name);
                log::debug!(
                    "{source_name}: name={:?} phone={:?} email={:?}",
                    fields.name,
                    fields.phone,
                    fields.email
                );
                ProcessedFile {
                    record: ExtractionRecord::from_fields(source_name, fields),
                    failure: None,
                }
            }
            Err(e) => {
                log::warn!("{source_name}: text extraction failed: {e}");
                ProcessedFile {
                    record: ExtractionRecord::unrecognized(source_name),
                    failure: Some(e),
                }
            }
        }
    }

    /// Processes `paths` one at a time, in order.
    ///
    /// Only one document's content is held in memory at a time.
    #[must_use]
    pub fn process_batch(
        &self,
        paths: &[PathBuf],
        progress: &Arc<dyn ProgressCallback>,
    ) -> BatchReport {
        let mut report = BatchReport {
            records: Vec::with_capacity(paths.len()),
            summary: BatchSummary::new(),
        };

        progress.set_total(paths.len() as u64);

        for path in paths {
            let processed = self.process(path);
            let name = processed.record.source_name.clone();

            match processed.failure {
                Some(failure) => report
                    .summary
                    .record_failure(name.clone(), failure.cause.to_string()),
                None => report.summary.record_success(),
            }

            report.records.push(processed.record);
            progress.set_message(name);
            progress.inc(1);
        }

        log::info!(
            "Processed {} file(s): {} succeeded, {} failed",
            report.summary.total,
            report.summary.succeeded,
            report.summary.failed
        );
        progress.finish(format!(
            "{} file(s) processed, {} failed",
            report.summary.total, report.summary.failed
        ));

        report
    }
}

fn source_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
