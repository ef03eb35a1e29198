//! Run configuration from CLI flags and environment variables.
//!
//! Precedence is flag, then environment variable, then built-in default.

use std::ffi::OsString;
use std::path::PathBuf;

use resume_extract_pdf::DEFAULT_MAX_PAGES;

/// Environment variable naming the folder scanned for resumes.
pub const DATA_DIR_ENV: &str = "RESUME_DATA_DIR";

/// Environment variable naming the output spreadsheet.
pub const OUTPUT_ENV: &str = "RESUME_OUTPUT";

/// Folder scanned when neither flag nor environment variable is set.
pub const DEFAULT_DATA_DIR: &str = "datas";

/// Spreadsheet written when neither flag nor environment variable is set.
pub const DEFAULT_OUTPUT: &str = "resume_info.csv";

/// Flags accepted by the `extract` subcommand.
#[derive(Debug, clap::Args)]
pub struct ExtractArgs {
    /// Folder containing PDF resumes (searched recursively)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Output spreadsheet path (CSV)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Number of leading pages read from each PDF
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,
    /// Also write the batch summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

/// Fully resolved settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Folder scanned for PDFs.
    pub data_dir: PathBuf,
    /// Spreadsheet written after processing.
    pub output: PathBuf,
    /// Pages read per document.
    pub max_pages: usize,
    /// Optional JSON summary destination.
    pub summary_json: Option<PathBuf>,
}

impl From<ExtractArgs> for ExtractConfig {
    fn from(args: ExtractArgs) -> Self {
        Self {
            data_dir: data_dir_or_env(args.data_dir),
            output: resolve(args.output, std::env::var_os(OUTPUT_ENV), DEFAULT_OUTPUT),
            max_pages: args.max_pages.max(1),
            summary_json: args.summary_json,
        }
    }
}

impl ExtractConfig {
    /// Settings taken only from the environment and defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from(ExtractArgs {
            data_dir: None,
            output: None,
            max_pages: DEFAULT_MAX_PAGES,
            summary_json: None,
        })
    }
}

/// Resolves the data folder from a flag value or the environment.
#[must_use]
pub fn data_dir_or_env(flag: Option<PathBuf>) -> PathBuf {
    resolve(flag, std::env::var_os(DATA_DIR_ENV), DEFAULT_DATA_DIR)
}

fn resolve(flag: Option<PathBuf>, env: Option<OsString>, default: &str) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let path = resolve(
            Some(PathBuf::from("flag")),
            Some(OsString::from("env")),
            "default",
        );
        assert_eq!(path, PathBuf::from("flag"));
    }

    #[test]
    fn environment_beats_default() {
        let path = resolve(None, Some(OsString::from("env")), "default");
        assert_eq!(path, PathBuf::from("env"));
    }

    #[test]
    fn empty_environment_falls_back_to_default() {
        let path = resolve(None, Some(OsString::new()), "default");
        assert_eq!(path, PathBuf::from("default"));
        assert_eq!(resolve(None, None, "default"), PathBuf::from("default"));
    }

    #[test]
    fn max_pages_is_at_least_one() {
        let config = ExtractConfig::from(ExtractArgs {
            data_dir: Some(PathBuf::from("in")),
            output: Some(PathBuf::from("out.csv")),
            max_pages: 0,
            summary_json: None,
        });
        assert_eq!(config.max_pages, 1);
        assert_eq!(config.data_dir, PathBuf::from("in"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
    }
}
