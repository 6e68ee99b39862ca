//! Applying command-line overrides on top of a loaded config

use crate::domain::{normalize_extension, Config};
use std::path::PathBuf;

/// Values supplied on the command line or through environment variables.
///
/// `None` means "not given", so the config file or default value wins.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub include_extensions: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(input_dir) = cli.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_file) = cli.output_file {
        config.output_file = output_file;
    }
    if let Some(extensions) = cli.include_extensions {
        let normalized: Vec<String> =
            extensions.iter().filter_map(|ext| normalize_extension(ext)).collect();
        if normalized.is_empty() {
            tracing::warn!(
                "Ignoring empty extension list; keeping {:?}",
                config.include_extensions
            );
        } else {
            config.include_extensions = normalized;
        }
    }
    config
}
