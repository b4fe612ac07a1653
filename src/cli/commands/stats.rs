use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::{finish, load_tables, located, project_config};
use super::{CommandResult, CommandSummary, LanguageStats, StatsSummary};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let config = project_config()?;
    let (tables, diagnostics) = load_tables(&config, &cmd.table)?;

    let languages = tables
        .stores()
        .map(|store| LanguageStats {
            language: store.language(),
            count: store.count(),
            missing: store.missing_ids().to_vec(),
            list_missing: cmd.all_missing || store.count() > config.missing_report_threshold,
        })
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            table: cmd.table.table.clone(),
            languages,
        }),
        located(&cmd.table.table, diagnostics),
        true,
    ))
}
