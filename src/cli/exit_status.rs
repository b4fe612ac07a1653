use std::process::ExitCode;

/// Process exit status of the `texttable` binary.
///
/// Only error-severity diagnostics produce [`ExitStatus::Failure`]: a table
/// element or overlay row that was skipped, or a text that is not a valid
/// template. Warnings such as missing translations leave the status at
/// [`ExitStatus::Success`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command ran without error diagnostics. Warnings may be present.
    Success,
    /// The command ran but reported at least one error diagnostic.
    Failure,
    /// The command could not run: unreadable or malformed table, unresolved
    /// overlay columns, bad configuration.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
