//! Output rendering (run reports)

pub mod report;

pub use report::write_report;
