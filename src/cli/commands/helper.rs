use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::TableArgs;
use super::{CommandResult, CommandSummary, FileDiagnostic};
use crate::config::{Config, load_config};
use crate::core::{LoadOptions, TextTables, load_all_languages};
use crate::issues::{Diagnostics, Severity};

pub fn finish(
    summary: CommandSummary,
    diagnostics: Vec<FileDiagnostic>,
    exit_on_errors: bool,
) -> CommandResult {
    let mut result = CommandResult {
        kind: summary.kind(),
        summary,
        error_count: 0,
        warning_count: 0,
        exit_on_errors,
        diagnostics,
    };
    result.error_count = result.count(Severity::Error);
    result.warning_count = result.count(Severity::Warning);
    result
}

/// Attach `path` to every diagnostic in `diagnostics`.
pub fn located(path: &Path, diagnostics: Diagnostics) -> Vec<FileDiagnostic> {
    let path = path.display().to_string();
    diagnostics
        .into_iter()
        .map(|diagnostic| FileDiagnostic {
            path: path.clone(),
            diagnostic,
        })
        .collect()
}

pub fn project_config() -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    Ok(load_config(&cwd)?.config)
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn load_options(config: &Config, args: &TableArgs) -> LoadOptions {
    let mut options = config.load_options();
    if args.first_extra_row.is_some() {
        options.first_extra_row = args.first_extra_row;
    }
    options
}

/// Read the table named by `args` and load every language from it.
pub fn load_tables(config: &Config, args: &TableArgs) -> Result<(TextTables, Diagnostics)> {
    let bytes = read_file(&args.table)?;
    load_all_languages(&bytes, &load_options(config, args))
        .with_context(|| format!("Failed to load text table: {}", args.table.display()))
}

pub fn output_path(output: Option<PathBuf>, config: &Config) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(&config.output))
}
