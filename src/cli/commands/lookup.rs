use std::fmt::Display;

use anyhow::{Context, Result};

use super::super::args::LookupCommand;
use super::helper::{finish, load_options, located, project_config, read_file};
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::core::Localizer;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let config = project_config()?;
    let table = &cmd.table.table;
    let localizer =
        Localizer::with_options(read_file(table)?, load_options(&config, &cmd.table));

    let mut diagnostics = localizer
        .set_active_language(cmd.language)
        .with_context(|| format!("Failed to load text table: {}", table.display()))?;

    let args: Vec<&dyn Display> = cmd.args.iter().map(|arg| arg as &dyn Display).collect();
    let text = localizer.lookup_and_format(&cmd.id, &args);
    diagnostics.extend(localizer.take_diagnostics());

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text }),
        located(table, diagnostics),
        true,
    ))
}
