//! Implementation of the `docforge init` command.
//!
//! Writes a starter `docforge.toml` to the current directory. Config is
//! project-local by convention (the scaffolder runs from the docs repo
//! root), so init targets the working directory rather than the global
//! config path.

use std::path::Path;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const CONFIG_FILE: &str = "docforge.toml";

/// Execute the `docforge init` command.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::InvalidInput {
            message: format!("{CONFIG_FILE} already exists (use --force to overwrite)"),
        });
    }

    let rendered = toml::to_string_pretty(&AppConfig::default()).map_err(|e| {
        CliError::ConfigError {
            message: format!("failed to render default configuration: {e}"),
            source: None,
        }
    })?;

    std::fs::write(path, rendered)?;
    info!(path = %path.display(), "Configuration file written");

    output.success(&format!("Wrote {CONFIG_FILE}"))?;
    output.print("Edit it to change the projects directory or the incident template path.")?;
    Ok(())
}
