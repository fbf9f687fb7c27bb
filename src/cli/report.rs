//! Report formatting and printing utilities.
//!
//! Separate from core logic so the generator can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use serde_json::{Map, Value};

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::ConfigFormat;
use crate::core::{CollectWarning, GenerateOutcome, GenerateSummary, GeneratorOptions};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate_to(
            summary,
            result.verbose,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
    }
}

/// Print problems found while loading the config file.
pub fn print_config_warnings(warnings: &[String]) {
    print_config_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_config_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print the resolved configuration (verbose mode).
pub fn print_configuration(
    source: Option<&Path>,
    options: &GeneratorOptions,
    extra: &Map<String, Value>,
) {
    print_configuration_to(source, options, extra, &mut io::stdout().lock());
}

pub fn print_configuration_to<W: Write>(
    source: Option<&Path>,
    options: &GeneratorOptions,
    extra: &Map<String, Value>,
    writer: &mut W,
) {
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    let _ = writeln!(writer, "{}", "Configuration:".bold());
    let _ = writeln!(writer, "  Config file: {}", source);
    let _ = writeln!(writer, "  Locales path: {}", options.locales_path.display());
    let _ = writeln!(writer, "  Output directory: {}", options.output_dir.display());
    let _ = writeln!(writer, "  Default namespace: {}", options.default_namespace);
    let _ = writeln!(writer, "  Base locale: {}", options.base_locale);
    if !options.exclude.is_empty() {
        let _ = writeln!(writer, "  Exclude: {}", options.exclude.join(", "));
    }
    if !extra.is_empty() {
        let keys: Vec<&str> = extra.keys().map(String::as_str).collect();
        let _ = writeln!(
            writer,
            "  {} {}",
            "Ignored fields:".dimmed(),
            keys.join(", ").dimmed()
        );
    }
    let _ = writeln!(writer);
}

/// Print the outcome of a generation run: warnings to `err`, progress to `out`.
pub fn print_generate_to<O: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_collect_warnings_to(&summary.warnings, verbose, err);

    match &summary.outcome {
        GenerateOutcome::NoTranslations => {
            let _ = writeln!(
                err,
                "{} No translation files found in {}",
                "warning:".bold().yellow(),
                summary.locales_path.display()
            );
        }
        GenerateOutcome::Written {
            interfaces_path,
            types_path,
            created_output_dir,
        } => {
            if verbose {
                if *created_output_dir
                    && let Some(dir) = interfaces_path.parent()
                {
                    let _ = writeln!(out, "Created directory: {}", dir.display());
                }
                for namespace in &summary.namespaces {
                    let _ = writeln!(
                        out,
                        "  {}: {} {}",
                        namespace.name,
                        namespace.key_count,
                        plural(namespace.key_count, "key", "keys")
                    );
                }
            }

            let count = summary.namespaces.len();
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Generated type files for {} {}",
                    count,
                    plural(count, "namespace", "namespaces")
                )
                .green()
            );
            let _ = writeln!(out, "  {} {}", "-->".blue(), interfaces_path.display());
            let _ = writeln!(out, "  {} {}", "-->".blue(), types_path.display());
        }
    }
}

fn print_collect_warnings_to<W: Write>(warnings: &[CollectWarning], verbose: bool, writer: &mut W) {
    for warning in warnings {
        if warning.is_verbose_only() {
            if verbose {
                let _ = writeln!(writer, "{} {}", "note:".bold(), warning.to_string().dimmed());
            }
        } else {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
        }
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "Error: {}", error);
        let _ = writeln!(err, "Use {} to overwrite it.", "--force".cyan());
        return;
    }

    if summary.created {
        let format = match summary.format {
            ConfigFormat::Json => "JSON",
            ConfigFormat::CommonJs => "CommonJS",
            ConfigFormat::EsModule => "ES module",
        };
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {} ({})", summary.path.display(), format).green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// Tests
// ============================================================
