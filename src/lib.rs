//! code-merger: merge source files from a directory tree into one text file
//!
//! Every file under the input directory whose name ends with one of the
//! allowed extensions (case-insensitive) is appended to the output file
//! behind a banner naming its path. Files that cannot be read are reported
//! and skipped.

pub mod cli;
pub mod config;
pub mod domain;
pub mod merge;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, FileFailure, MergeReport, MergeStats, MergedFile};
pub use merge::{merge_code, Merger};
