//! Merging qualifying files into a single text file

use crate::domain::MergeReport;
use anyhow::Result;
use std::path::Path;

pub mod banner;
pub mod merger;
pub mod reader;

pub use merger::Merger;

/// Merge every `.java` and `.xml` file under `input_dir` into `output_file`.
pub fn merge_code<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_file: Q,
) -> Result<MergeReport> {
    Merger::new().merge(input_dir.as_ref(), output_file.as_ref())
}
