#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Extraction record and batch summary types.
//!
//! Extractors work with plain [`Option`] values ([`ExtractedFields`]).
//! Sentinel strings are only substituted when an [`ExtractionRecord`] is
//! built, so downstream consumers (the spreadsheet exporter, the console
//! summary) never have to deal with missing values.

use serde::{Deserialize, Serialize};

/// Placeholder written to the name column when no name could be found.
pub const NAME_NOT_RECOGNIZED: &str = "not recognized";

/// Placeholder written to every other column when no value could be found.
pub const FIELD_NOT_FOUND: &str = "not found";

/// Raw extractor output for a single document, before sentinel
/// substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Best-guess person name.
    pub name: Option<String>,
    /// First mobile number found in the text.
    pub phone: Option<String>,
    /// First email address found in the text.
    pub email: Option<String>,
    /// Desired position, from the text or the file name.
    pub position: Option<String>,
    /// Desired work location, from the text or the file name.
    pub location: Option<String>,
    /// Expected salary, from the text or the file name.
    pub salary: Option<String>,
    /// `男` or `女`.
    pub gender: Option<String>,
    /// Age in years.
    pub age: Option<String>,
    /// Availability date, or the first year-month date in the text.
    pub date: Option<String>,
}

/// One fully populated output row per processed file.
///
/// Every field always holds either a real value or a sentinel
/// ([`NAME_NOT_RECOGNIZED`] / [`FIELD_NOT_FOUND`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// File name of the source document (no directory components).
    pub source_name: String,
    /// Candidate's name.
    pub name: String,
    /// Candidate's mobile number.
    pub phone: String,
    /// Candidate's email address.
    pub email: String,
    /// Desired position.
    pub position: String,
    /// Desired work location.
    pub location: String,
    /// Expected salary.
    pub salary: String,
    /// Candidate's gender.
    pub gender: String,
    /// Candidate's age.
    pub age: String,
    /// Availability date.
    pub date: String,
}

impl ExtractionRecord {
    /// Builds a record from extractor output, substituting sentinels for
    /// absent (or blank) fields.
    #[must_use]
    pub fn from_fields(source_name: impl Into<String>, fields: ExtractedFields) -> Self {
        Self {
            source_name: source_name.into(),
            name: or_sentinel(fields.name, NAME_NOT_RECOGNIZED),
            phone: or_sentinel(fields.phone, FIELD_NOT_FOUND),
            email: or_sentinel(fields.email, FIELD_NOT_FOUND),
            position: or_sentinel(fields.position, FIELD_NOT_FOUND),
            location: or_sentinel(fields.location, FIELD_NOT_FOUND),
            salary: or_sentinel(fields.salary, FIELD_NOT_FOUND),
            gender: or_sentinel(fields.gender, FIELD_NOT_FOUND),
            age: or_sentinel(fields.age, FIELD_NOT_FOUND),
            date: or_sentinel(fields.date, FIELD_NOT_FOUND),
        }
    }

    /// Builds the record used for a file whose text could not be read:
    /// every field holds its sentinel.
    #[must_use]
    pub fn unrecognized(source_name: impl Into<String>) -> Self {
        Self::from_fields(source_name, ExtractedFields::default())
    }

    /// Returns `true` if the name column holds a real value.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name != NAME_NOT_RECOGNIZED
    }
}

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| sentinel.to_owned())
}

/// A file that could not be processed, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedEntry {
    /// File name of the failed document.
    pub filename: String,
    /// Why text acquisition failed (e.g. `"encrypted"`).
    pub reason: String,
}

/// Aggregate outcome of a batch run.
///
/// Only mutate through [`BatchSummary::record_success`] and
/// [`BatchSummary::record_failure`], which keep
/// `succeeded + failed == total` and `failed_entries.len() == failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of files processed.
    pub total: u64,
    /// Number of files whose text was extracted.
    pub succeeded: u64,
    /// Number of files whose text could not be extracted.
    pub failed: u64,
    /// Failed files in processing order.
    pub failed_entries: Vec<FailedEntry>,
}

impl BatchSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
            failed_entries: Vec::new(),
        }
    }

    /// Counts one successfully processed file.
    pub const fn record_success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    /// Counts one failed file and remembers why it failed.
    pub fn record_failure(&mut self, filename: impl Into<String>, reason: impl Into<String>) {
        self.total += 1;
        self.failed += 1;
        self.failed_entries.push(FailedEntry {
            filename: filename.into(),
            reason: reason.into(),
        });
    }

    /// Returns `true` if every file in the batch succeeded.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_sentinels() {
        let record = ExtractionRecord::from_fields(
            "a.pdf",
            ExtractedFields {
                phone: Some("13812345678".to_owned()),
                email: Some("   ".to_owned()),
                ..ExtractedFields::default()
            },
        );

        assert_eq!(record.source_name, "a.pdf");
        assert_eq!(record.name, NAME_NOT_RECOGNIZED);
        assert_eq!(record.phone, "13812345678");
        assert_eq!(record.email, FIELD_NOT_FOUND);
        assert_eq!(record.position, FIELD_NOT_FOUND);
        assert_eq!(record.age, FIELD_NOT_FOUND);
        assert!(!record.has_name());
    }

    #[test]
    fn unrecognized_record_is_all_sentinels() {
        let record = ExtractionRecord::unrecognized("locked.pdf");
        assert_eq!(record.name, NAME_NOT_RECOGNIZED);
        for field in [
            &record.phone,
            &record.email,
            &record.position,
            &record.location,
            &record.salary,
            &record.gender,
            &record.age,
            &record.date,
        ] {
            assert_eq!(field, FIELD_NOT_FOUND);
        }
    }

    #[test]
    fn summary_counts_stay_consistent() {
        let mut summary = BatchSummary::new();
        summary.record_success();
        summary.record_failure("bad.pdf", "corrupt");
        summary.record_success();
        summary.record_failure("locked.pdf", "encrypted");

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
        assert_eq!(summary.failed_entries.len() as u64, summary.failed);
        assert_eq!(summary.failed_entries[1].filename, "locked.pdf");
        assert_eq!(summary.failed_entries[1].reason, "encrypted");
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn summary_serializes_with_failed_entries() {
        let mut summary = BatchSummary::new();
        summary.record_failure("bad.pdf", "corrupt");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["failed"], 1);
        assert_eq!(json["failed_entries"][0]["reason"], "corrupt");
    }
}
