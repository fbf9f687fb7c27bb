use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::config::ConfigFormat;
use crate::core::GenerateSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub format: ConfigFormat,
    pub created: bool,
    /// Set when the file was not written (e.g. it already exists).
    pub error: Option<String>,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub verbose: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(summary) if summary.error.is_some() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
