//! i18n-typegen - TypeScript declarations for i18next translation keys
//!
//! Scans a locales directory (one subdirectory per namespace, one JSON file
//! per locale), takes the key shape from the base locale and writes two
//! declaration files so that translation keys are checked at compile time.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file discovery, loading and scaffolding
//! - `core`: Collection, flattening, rendering and persistence
//! - `utils`: Shared utility functions
//!
//! ## Example
//!
//! ```no_run
//! use i18n_typegen::core::{GeneratorOptions, I18nTypesGenerator};
//!
//! let options = GeneratorOptions::new("./src/locales", "./types").with_base_locale("en");
//! let summary = I18nTypesGenerator::new(options).generate()?;
//! println!("{} namespaces", summary.namespaces.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
