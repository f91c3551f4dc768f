//! Implementation of the `docforge layers` command.

use docforge_core::domain::LAYER_CATALOG;

use crate::{
    cli::{LayersArgs, LayersFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `docforge layers` command.
pub fn execute(args: LayersArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        LayersFormat::Table => print_table(&output),
        LayersFormat::List => print_list(&output),
        LayersFormat::Json => print_json(),
    }
}

fn print_table(output: &OutputManager) -> CliResult<()> {
    output.header("Available layers:")?;
    output.print("")?;
    output.print(&format!(
        "  {:<16} {:<8} {:<28} {}",
        "LAYER", "PREFIX", "DESCRIPTION", "DEFAULT"
    ))?;
    for def in &LAYER_CATALOG {
        let default = if def.layer.checked_by_default() {
            "\u{2713}"
        } else {
            ""
        };
        output.print(&format!(
            "  {:<16} {:<8} {:<28} {}",
            def.name, def.prefix, def.description, default
        ))?;
    }
    output.print("")?;
    output.print("Folder names are `<prefix>-<slug>`, e.g. 00-planning.")?;
    Ok(())
}

fn print_list(output: &OutputManager) -> CliResult<()> {
    for def in &LAYER_CATALOG {
        output.print(def.name)?;
    }
    Ok(())
}

fn print_json() -> CliResult<()> {
    let json =
        serde_json::to_string_pretty(&LAYER_CATALOG).map_err(|e| CliError::InvalidInput {
            message: format!("failed to serialize layer catalog: {e}"),
        })?;
    // JSON goes straight to stdout, unfiltered: it's machine output and must
    // survive --quiet and redirection unchanged.
    println!("{json}");
    Ok(())
}
