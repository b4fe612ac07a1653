/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with diagnostics and exit behavior
/// - `Err` if the command fails (unreadable table, bad overlay header, ...)
use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{
        export::export, init::init, lookup::lookup, merge::merge, normalize::normalize,
        stats::stats,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Normalize(cmd)) => Ok(normalize(cmd)),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
