//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `stats`: Load a table for every language and show counts and missing ids
//! - `merge`: Overlay language columns from a CSV export onto a table
//! - `export`: Re-serialize a table in canonical form
//! - `lookup`: Look up (and format) one text id in one language
//! - `normalize`: Print the normalized form of text ids
//! - `init`: Initialize texttable configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Language;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Stats(cmd)) => cmd.table.common.verbose,
            Some(Command::Merge(cmd)) => cmd.table.common.verbose,
            Some(Command::Export(cmd)) => cmd.table.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.table.common.verbose,
            Some(Command::Normalize(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// The canonical JSON table a command reads.
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Canonical JSON text table
    pub table: PathBuf,

    /// Row index where appended override rows start (overrides config file)
    #[arg(long)]
    pub first_extra_row: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// List missing ids for every language, regardless of its entry count
    #[arg(long)]
    pub all_missing: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Delimited spreadsheet export with the translated columns
    pub overlay: PathBuf,

    /// Languages to take from the overlay
    /// Can be specified multiple times: --lang ukr --lang rus
    #[arg(short, long = "lang", value_enum, required = true)]
    pub languages: Vec<Language>,

    /// Where to write the merged table (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Actually write the merged table (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Overlay cell delimiter (overrides config file)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Overlay text encoding label (overrides config file)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Header prefix before `textId` and language tags (overrides config file)
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Where to write the table (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Language to look the text up in
    #[arg(short, long = "lang", value_enum)]
    pub language: Language,

    /// Text id (normalized before lookup)
    pub id: String,

    /// Positional arguments for `{0}`, `{1}`, ... placeholders
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Raw text ids
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show per-language entry counts and missing ids
    Stats(StatsCommand),
    /// Merge language columns from a CSV export into a text table
    Merge(MergeCommand),
    /// Re-serialize a text table in canonical form
    Export(ExportCommand),
    /// Look up a text id in one language
    Lookup(LookupCommand),
    /// Print normalized text ids
    Normalize(NormalizeCommand),
    /// Initialize a new .texttablerc.json configuration file
    Init,
}
