use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, including runs that found nothing to generate
/// - `Failure` (1): Command refused to act (e.g. `init` target already exists)
/// - `Error` (2): Command failed (missing locales directory, write error, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command refused to act.
    Failure,
    /// Command failed due to a fatal error.
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
