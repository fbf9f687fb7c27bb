use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{generate::generate, init::init},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary
/// - `Err` if the command fails (e.g., locales directory missing, write errors)
pub fn run(Arguments { command, generate: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init(init_args)) => init(init_args),
        None => generate(args),
    }
}
