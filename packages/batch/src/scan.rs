//! Recursive discovery of PDF files in the data folder.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The data folder could not be prepared or read.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The folder did not exist and could not be created.
    #[error("failed to create data folder {}: {source}", path.display())]
    Create {
        /// Folder that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The path exists but is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The folder itself could not be read.
    #[error("failed to read data folder {}: {source}", path.display())]
    Read {
        /// Folder that was being read.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
}

/// Recursively lists every `.pdf` file (any extension case) under `dir`,
/// sorted by path.
///
/// A missing folder is created so the user has somewhere to drop files.
/// Unreadable entries below the top level are skipped with a warning;
/// only an unreadable top-level folder is an error.
///
/// # Errors
///
/// Returns [`ScanError`] if the folder cannot be created, is not a
/// directory, or cannot be read.
pub fn scan_pdf_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| ScanError::Create {
            path: dir.to_path_buf(),
            source,
        })?;
        log::info!("Created data folder {}", dir.display());
    }

    if !dir.is_dir() {
        return Err(ScanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::Read {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() && is_pdf(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files.dedup();

    log::debug!("Found {} PDF file(s) under {}", files.len(), dir.display());

    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn finds_pdfs_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();
        fs::write(dir.path().join("a.PDF"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("nested/deeper/c.Pdf"), b"").unwrap();

        let files = scan_pdf_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.PDF"),
                PathBuf::from("b.pdf"),
                PathBuf::from("nested/deeper/c.Pdf"),
            ]
        );
    }

    #[test]
    fn creates_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("datas");

        let files = scan_pdf_files(&data).unwrap();

        assert!(files.is_empty());
        assert!(data.is_dir());
    }

    #[test]
    fn file_path_is_not_a_folder() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resume.pdf");
        fs::write(&file, b"").unwrap();

        assert!(matches!(
            scan_pdf_files(&file),
            Err(ScanError::NotADirectory { .. })
        ));
    }
}
