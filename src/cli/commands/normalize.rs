use super::super::args::NormalizeCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, NormalizeSummary};
use crate::core::normalize as normalize_id;

pub fn normalize(cmd: NormalizeCommand) -> CommandResult {
    let ids = cmd.ids.iter().map(|raw| normalize_id(raw)).collect();
    finish(
        CommandSummary::Normalize(NormalizeSummary { ids }),
        Vec::new(),
        false,
    )
}
