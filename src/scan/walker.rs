//! Directory walker with case-insensitive extension filtering

use crate::domain::{default_include_extensions, normalize_extension, FileFailure};
use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files found by a walk, in walk order, plus what was skipped along the way.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub files_scanned: usize,
    pub files_skipped_extension: usize,
}

/// Walks a directory tree and yields the files whose names end with one of
/// the allowed extensions.
pub struct FileWalker {
    root_path: PathBuf,
    include_extensions: Vec<String>,
}

impl FileWalker {
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            include_extensions: default_include_extensions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Set file extensions to include (e.g., ".java", "xml")
    pub fn include_extensions(mut self, extensions: Vec<String>) -> Self {
        self.include_extensions =
            extensions.iter().filter_map(|ext| normalize_extension(ext)).collect();
        self
    }

    /// Check whether a file name ends with an allowed extension, ignoring case.
    pub fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_lowercase(),
            None => return false,
        };
        self.include_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Walk the tree.
    ///
    /// Within each directory, files come before subdirectories and entries are
    /// visited in file-name order, so the result is stable across runs.
    pub fn walk(&self) -> Result<WalkOutcome> {
        let mut outcome = WalkOutcome::default();

        let walker = WalkDir::new(&self.root_path).follow_links(false).sort_by(files_first);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root_path.clone());
                    tracing::warn!("Error processing {}: {}", path.display(), err);
                    outcome.failures.push(FileFailure { path, error: err.to_string() });
                    continue;
                }
            };

            let path = entry.path();

            // Symlinks to directories are not descended into, and are not files either.
            if path.is_dir() {
                continue;
            }

            outcome.files_scanned += 1;

            if !self.matches(path) {
                tracing::trace!("skipping {} (extension)", path.display());
                outcome.files_skipped_extension += 1;
                continue;
            }

            outcome.files.push(path.to_path_buf());
        }

        tracing::debug!(
            "walked {}: {} files scanned, {} qualifying",
            self.root_path.display(),
            outcome.files_scanned,
            outcome.files.len()
        );

        Ok(outcome)
    }
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
