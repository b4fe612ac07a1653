use anyhow::{Context, Result};

use super::super::args::MergeCommand;
use super::helper::{finish, load_tables, located, output_path, project_config, read_file};
use super::{CommandResult, CommandSummary, MergeSummary};
use crate::config::{Config, parse_delimiter};
use crate::core::{OverlayOptions, merge_overlay, save_table};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let config = project_config()?;
    let overlay_options = overlay_options(&config, &cmd)?;
    let (mut tables, load_diagnostics) = load_tables(&config, &cmd.table)?;

    let overlay = read_file(&cmd.overlay)?;
    let report = merge_overlay(&overlay, &overlay_options, &cmd.languages, &mut tables)
        .with_context(|| format!("Failed to merge overlay: {}", cmd.overlay.display()))?;

    let output = output_path(cmd.output, &config);
    if cmd.apply {
        save_table(&tables, &output)?;
    }

    let mut diagnostics = located(&cmd.table.table, load_diagnostics);
    diagnostics.extend(located(&cmd.overlay, report.diagnostics));

    Ok(finish(
        CommandSummary::Merge(MergeSummary {
            output,
            is_apply: cmd.apply,
            merged: report.merged,
            missing: report.missing,
            row_count: tables.baseline().map_or(0, |store| store.count()),
        }),
        diagnostics,
        true,
    ))
}

/// Config values, overridden by whatever was given on the command line.
fn overlay_options(config: &Config, cmd: &MergeCommand) -> Result<OverlayOptions> {
    let mut options = config.overlay_options()?;
    if let Some(delimiter) = &cmd.delimiter {
        options.delimiter = parse_delimiter(delimiter)?;
    }
    if let Some(label) = &cmd.encoding {
        options.encoding = OverlayOptions::encoding_for_label(label)?;
    }
    if let Some(prefix) = &cmd.prefix {
        options.column_prefix = prefix.clone();
    }
    Ok(options)
}
