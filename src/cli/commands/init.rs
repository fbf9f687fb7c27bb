use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::args::InitArgs;
use crate::config::{default_config_content, detect_config_format};

/// Scaffold a default config file in the format the host project expects.
pub fn init(args: InitArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    init_in(args, &cwd)
}

fn init_in(args: InitArgs, cwd: &Path) -> Result<CommandResult> {
    let path = cwd.join(&args.output);
    let format = detect_config_format(&path);

    let mut summary = InitSummary {
        path: args.output.clone(),
        format,
        created: false,
        error: None,
    };

    if path.exists() && !args.force {
        summary.error = Some(format!("{} already exists", args.output.display()));
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, default_config_content(format)?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        summary.created = true;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(summary),
        verbose: false,
    })
}
