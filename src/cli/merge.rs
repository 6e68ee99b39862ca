//! Merge command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{parse_csv, resolve_config};
use crate::config::CliOverrides;
use crate::merge::Merger;
use crate::render::write_report;
use crate::utils::format_with_commas;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Directory to collect source files from [default: app/src/main]
    #[arg(short, long, value_name = "DIR", env = "CODE_MERGER_INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the merged text to [default: merged_code.txt]
    #[arg(short, long, value_name = "FILE", env = "CODE_MERGER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Extensions to merge (comma-separated, e.g. '.java,.xml')
    #[arg(short = 'x', long, value_name = "EXTS", env = "CODE_MERGER_EXTENSIONS")]
    pub ext: Option<String>,

    /// Path to config file (code-merger.toml or .code-merger.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a JSON report of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Leave the timestamp out of the JSON report
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let overrides = CliOverrides {
        input_dir: args.input,
        output_file: args.output,
        include_extensions: parse_csv(&args.ext),
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;

    println!("Merging code files from {}...", config.input_dir.display());

    let report = Merger::new()
        .include_extensions(config.include_extensions.clone())
        .merge(&config.input_dir, &config.output_file)?;

    tracing::info!(
        "merged {} files, {} bytes written, {} failed",
        report.stats.files_merged,
        format_with_commas(report.stats.bytes_written),
        report.stats.files_failed
    );

    if let Some(report_path) = args.report.as_ref() {
        write_report(report_path, &report, !args.no_timestamp)?;
        println!("Report written to {}", report_path.display());
    }

    println!("Merge completed! Output file: {}", config.output_file.display());
    Ok(())
}
