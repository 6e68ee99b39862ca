//! Report JSON generation.

use crate::domain::{MergeReport, REPORT_SCHEMA_VERSION};
use crate::utils::normalize_path;
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use std::path::Path;

pub fn write_report(
    report_path: &Path,
    report: &MergeReport,
    include_timestamp: bool,
) -> Result<()> {
    let value = build_report(report, include_timestamp);

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed creating report directory: {}", parent.display())
            })?;
        }
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    Ok(())
}

fn build_report(report: &MergeReport, include_timestamp: bool) -> Value {
    let files = report
        .merged
        .iter()
        .map(|f| {
            json!({
                "id": file_id(&f.relative_path),
                "path": f.relative_path,
                "bytes": f.bytes,
            })
        })
        .collect::<Vec<_>>();

    let failures = report
        .failures
        .iter()
        .map(|f| {
            json!({
                "path": normalize_path(&f.path.display().to_string()),
                "error": f.error,
            })
        })
        .collect::<Vec<_>>();

    let mut out = Map::new();
    out.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if include_timestamp {
        out.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    out.insert(
        "input_dir".to_string(),
        Value::String(normalize_path(&report.input_dir.display().to_string())),
    );
    out.insert(
        "output_file".to_string(),
        Value::String(normalize_path(&report.output_file.display().to_string())),
    );
    out.insert("stats".to_string(), report.stats.to_report_value());
    out.insert("files".to_string(), Value::Array(files));
    out.insert("failures".to_string(), Value::Array(failures));
    Value::Object(out)
}

/// Stable ID: SHA-256 of the relative path, first 16 hex chars.
fn file_id(relative_path: &str) -> String {
    let hash = Sha256::digest(relative_path.as_bytes());
    format!("{:x}", hash)[..16].to_string()
}
