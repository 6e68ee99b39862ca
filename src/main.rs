//! code-merger: merge source files from a directory tree into one text file

use anyhow::Result;

fn main() -> Result<()> {
    code_merger::cli::run()
}
