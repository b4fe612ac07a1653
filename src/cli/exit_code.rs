use super::commands::CommandResult;
use super::exit_status::ExitStatus;

/// Failure when the command counts errors and reported any; warnings never fail.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
