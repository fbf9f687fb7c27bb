//! CLI argument definitions using clap.
//!
//! Running without a subcommand generates the declaration files.
//!
//! ## Commands
//!
//! - (default): Generate `i18n.interfaces.d.ts` and `i18n.d.ts`
//! - `init`: Create a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE_NAME;

#[derive(Debug, Parser)]
#[command(
    name = "i18n-types-gen",
    author,
    version,
    about = "Generate TypeScript types from i18next translation files",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments of the default (generate) action.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Path to config file
    #[arg(short, long, env = "I18N_TYPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to locales directory (overrides config file)
    #[arg(short, long)]
    pub locales: Option<PathBuf>,

    /// Output directory for generated types (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Default namespace (overrides config file)
    #[arg(short, long)]
    pub default_namespace: Option<String>,

    /// Base locale to use for type generation (overrides config file)
    #[arg(short, long)]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output path for config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a default configuration file
    Init(InitArgs),
}
