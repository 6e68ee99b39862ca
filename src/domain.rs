//! Core data types shared across the merger.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const DEFAULT_INPUT_DIR: &str = "app/src/main";
pub const DEFAULT_OUTPUT_FILE: &str = "merged_code.txt";

pub fn default_include_extensions() -> &'static [&'static str] {
    &[".java", ".xml"]
}

/// Normalize an extension to lowercase with a leading dot.
///
/// Returns `None` for blank input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    if trimmed.starts_with('.') {
        Some(trimmed)
    } else {
        Some(format!(".{}", trimmed))
    }
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    #[serde(deserialize_with = "deserialize_extensions")]
    pub include_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            include_extensions: default_include_extensions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    Single(String),
    List(Vec<String>),
}

/// Accept either `"java, xml"` or `["java", ".xml"]`.
fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::Single(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::List(items) => items,
    };
    Ok(raw.iter().filter_map(|ext| normalize_extension(ext)).collect())
}

/// A qualifying file whose block was written to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub bytes: u64,
}

/// A qualifying file that could not be read and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub files_scanned: usize,
    pub files_merged: usize,
    pub files_skipped_extension: usize,
    pub files_failed: usize,
    pub bytes_written: u64,
}

impl MergeStats {
    pub fn to_report_value(&self) -> Value {
        json!({
            "files_scanned": self.files_scanned,
            "files_merged": self.files_merged,
            "files_skipped_extension": self.files_skipped_extension,
            "files_failed": self.files_failed,
            "bytes_written": self.bytes_written,
        })
    }
}

/// Outcome of a completed merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub merged: Vec<MergedFile>,
    pub failures: Vec<FileFailure>,
    pub stats: MergeStats,
}

impl MergeReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
