//! Spreadsheet (CSV) and JSON summary output.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use resume_extract_models::{BatchSummary, ExtractionRecord};

/// Column headers, in output order.
pub const HEADERS: [&str; 10] = [
    "File", "Name", "Phone", "Email", "Position", "Location", "Salary", "Gender", "Age", "Date",
];

/// Byte-order mark so spreadsheet applications read the file as UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writing an output file failed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Creating or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a CSV row failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Encoding the JSON summary failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes one CSV row per record, in order, to `path`.
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn export_csv(records: &[ExtractionRecord], path: &Path) -> Result<(), ExportError> {
    let mut file = create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADERS)?;

    for record in records {
        writer.write_record([
            &record.source_name,
            &record.name,
            &record.phone,
            &record.email,
            &record.position,
            &record.location,
            &record.salary,
            &record.gender,
            &record.age,
            &record.date,
        ])?;
    }

    writer.flush()?;

    log::info!("Wrote {} row(s) to {}", records.len(), path.display());

    Ok(())
}

/// Writes `summary` as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be created or written.
pub fn write_summary_json(summary: &BatchSummary, path: &Path) -> Result<(), ExportError> {
    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, summary)?;
    file.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use resume_extract_models::ExtractedFields;

    use super::*;

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/resume_info.csv");
        let records = vec![
            ExtractionRecord::from_fields(
                "a.pdf",
                ExtractedFields {
                    name: Some("张三".to_owned()),
                    phone: Some("13812345678".to_owned()),
                    email: Some("a.b@test.com".to_owned()),
                    age: Some("28".to_owned()),
                    ..ExtractedFields::default()
                },
            ),
            ExtractionRecord::unrecognized("b, locked.pdf"),
        ];

        export_csv(&records, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "File,Name,Phone,Email,Position,Location,Salary,Gender,Age,Date");
        assert_eq!(
            lines[1],
            "a.pdf,张三,13812345678,a.b@test.com,not found,not found,not found,not found,28,not found"
        );
        assert_eq!(
            lines[2],
            "\"b, locked.pdf\",not recognized,not found,not found,not found,not found,not found,not found,not found,not found"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn writes_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let mut summary = BatchSummary::new();
        summary.record_success();
        summary.record_failure("locked.pdf", "encrypted");

        write_summary_json(&summary, &path).unwrap();

        let parsed: BatchSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, summary);
    }
}
