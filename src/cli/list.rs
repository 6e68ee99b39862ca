//! List command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{parse_csv, resolve_config};
use crate::config::CliOverrides;
use crate::scan::FileWalker;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to collect source files from [default: app/src/main]
    #[arg(short, long, value_name = "DIR", env = "CODE_MERGER_INPUT")]
    pub input: Option<PathBuf>,

    /// Extensions to list (comma-separated, e.g. '.java,.xml')
    #[arg(short = 'x', long, value_name = "EXTS", env = "CODE_MERGER_EXTENSIONS")]
    pub ext: Option<String>,

    /// Path to config file (code-merger.toml or .code-merger.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let overrides = CliOverrides {
        input_dir: args.input,
        output_file: None,
        include_extensions: parse_csv(&args.ext),
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;

    if !config.input_dir.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", config.input_dir.display());
    }

    let outcome = FileWalker::new(config.input_dir.clone())
        .include_extensions(config.include_extensions.clone())
        .walk()?;

    for path in &outcome.files {
        println!("{}", path.display());
    }
    println!(
        "{} qualifying files ({} scanned, extensions: {})",
        outcome.files.len(),
        outcome.files_scanned,
        config.include_extensions.join(", ")
    );

    Ok(())
}
