use anyhow::Result;

use super::super::args::ExportCommand;
use super::helper::{finish, load_tables, located, output_path, project_config};
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::core::save_table;

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let config = project_config()?;
    let (tables, diagnostics) = load_tables(&config, &cmd.table)?;
    let output = output_path(cmd.output, &config);

    save_table(&tables, &output)?;

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            output,
            row_count: tables.baseline().map_or(0, |store| store.count()),
            language_count: tables.len(),
        }),
        located(&cmd.table.table, diagnostics),
        true,
    ))
}
