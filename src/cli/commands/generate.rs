use std::{env, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::cli::args::GenerateArgs;
use crate::cli::report;
use crate::config::{Config, load_config};
use crate::core::I18nTypesGenerator;

/// Default action: load config, apply overrides, generate declaration files.
pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    run_in(args, &cwd)
}

fn run_in(args: GenerateArgs, cwd: &Path) -> Result<CommandResult> {
    let verbose = args.verbose;

    let loaded = load_config(args.config.as_deref(), cwd)?;
    report::print_config_warnings(&loaded.warnings);

    let mut config = loaded.config;
    apply_overrides(&mut config, &args);

    let options = config.to_generator_options(cwd);
    if verbose {
        report::print_configuration(loaded.source.as_deref(), &options, &config.extra);
    }

    let summary = I18nTypesGenerator::new(options).generate()?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(summary),
        verbose,
    })
}

/// CLI values win over config file values, field by field.
fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(ref locales) = args.locales {
        config.locales_path = locales.to_string_lossy().to_string();
    }
    if let Some(ref output) = args.output {
        config.output_dir = output.to_string_lossy().to_string();
    }
    if let Some(ref namespace) = args.default_namespace {
        config.default_namespace = namespace.clone();
    }
    if let Some(ref locale) = args.base_locale {
        config.base_locale = locale.clone();
    }
}
