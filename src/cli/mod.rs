//! Command-line interface for code-merger
//!
//! Running with no subcommand merges using the configured (or default)
//! paths; `list` previews which files would be merged.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod list;
mod merge;
mod utils;

/// Merge source files from a directory tree into a single text file
#[derive(Parser)]
#[command(name = "code-merger")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    merge: merge::MergeArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge matching files into one output file (the default)
    Merge(merge::MergeArgs),

    /// List the files that would be merged, in merge order
    List(list::ListArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Some(Commands::Merge(args)) => merge::run(args),
        Some(Commands::List(args)) => list::run(args),
        None => merge::run(cli.merge),
    }
}
