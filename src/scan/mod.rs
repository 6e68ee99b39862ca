//! Recursive discovery of files to merge

pub mod walker;

pub use walker::{FileWalker, WalkOutcome};
