//! The extraction run shared by the flag-driven and interactive modes.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

use resume_extract_batch::{Orchestrator, export_csv, scan_pdf_files, write_summary_json};
use resume_extract_cli_utils::{IndicatifProgress, MultiProgress};
use resume_extract_models::BatchSummary;
use resume_extract_pdf::TextExtractor;

use crate::config::ExtractConfig;

/// Scans the data folder, extracts every resume, and writes the
/// spreadsheet.
///
/// # Errors
///
/// Returns an error if the data folder cannot be read or an output file
/// cannot be written. Problems with individual PDFs are reported in the
/// summary instead.
pub fn extract(
    config: &ExtractConfig,
    multi: &MultiProgress,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let paths = scan_pdf_files(&config.data_dir)?;
    if paths.is_empty() {
        println!(
            "No PDF files found in {}. Put resumes there and run again.",
            config.data_dir.display()
        );
        return Ok(());
    }

    log::info!(
        "Extracting {} resume(s) from {} (first {} page(s) each)",
        paths.len(),
        config.data_dir.display(),
        config.max_pages
    );

    let progress = IndicatifProgress::files_bar(multi, "Extracting resumes");
    let orchestrator = Orchestrator::new(TextExtractor::new().with_max_pages(config.max_pages));
    let report = orchestrator.process_batch(&paths, &progress);

    export_csv(&report.records, &config.output)?;

    if let Some(path) = &config.summary_json {
        write_summary_json(&report.summary, path)?;
        log::info!("Wrote summary to {}", path.display());
    }

    println!();
    print!("{}", format_summary(&report.summary, &config.output));
    println!("Elapsed: {:.1}s", start.elapsed().as_secs_f64());

    Ok(())
}

/// Lists the PDF files the data folder currently holds.
///
/// # Errors
///
/// Returns an error if the data folder cannot be read.
pub fn scan(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let paths = scan_pdf_files(data_dir)?;

    println!("Found {} PDF file(s) in {}", paths.len(), data_dir.display());
    for path in &paths {
        let shown = path.strip_prefix(data_dir).unwrap_or(path);
        println!("  {}", shown.display());
    }

    Ok(())
}

/// Renders the end-of-run report shown on the console.
#[must_use]
pub fn format_summary(summary: &BatchSummary, output: &Path) -> String {
    let mut out = String::new();

    writeln!(out, "Processed: {}", summary.total).ok();
    writeln!(out, "Succeeded: {}", summary.succeeded).ok();
    writeln!(out, "Failed:    {}", summary.failed).ok();

    if !summary.failed_entries.is_empty() {
        writeln!(out, "Failed files:").ok();
        for entry in &summary.failed_entries {
            writeln!(out, "  - {} ({})", entry.filename, entry.reason).ok();
        }
    }

    writeln!(out, "Results written to {}", output.display()).ok();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_failures_with_reasons() {
        let mut summary = BatchSummary::new();
        summary.record_success();
        summary.record_failure("locked.pdf", "encrypted");
        summary.record_failure("scan.pdf", "no text layer");

        let text = format_summary(&summary, Path::new("out.csv"));

        assert!(text.contains("Processed: 3\n"));
        assert!(text.contains("Succeeded: 1\n"));
        assert!(text.contains("Failed:    2\n"));
        assert!(text.contains("  - locked.pdf (encrypted)\n"));
        assert!(text.contains("  - scan.pdf (no text layer)\n"));
        assert!(text.ends_with("Results written to out.csv\n"));
    }

    #[test]
    fn clean_run_has_no_failure_list() {
        let mut summary = BatchSummary::new();
        summary.record_success();

        let text = format_summary(&summary, Path::new("out.csv"));

        assert!(!text.contains("Failed files"));
    }
}
