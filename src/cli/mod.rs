//! Command-line interface layer.
//!
//! Parses arguments, runs the command and prints the outcome. The library
//! API under `core` never prints; everything user-facing happens here.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status())
}
