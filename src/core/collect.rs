//! Namespace collection: turns a locales directory into [`NamespaceTranslations`].
//!
//! Layout:
//!
//! ```text
//! locales/
//! ├── Common/ru.json        -> namespace `Common`
//! ├── Auth/ru.json          -> namespace `Auth`
//! └── Meta/                 -> namespace `Meta`, aggregated
//!     ├── ru.ts             (presence marks the aggregate, never read)
//!     ├── Home/ru.json      -> `Meta` group `Home`
//!     └── About/ru.json     -> `Meta` group `About`
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use super::parsers::json::parse_json_file;
use super::{NamespaceTranslations, TranslationTree};
use crate::utils::is_valid_identifier;

/// Reserved namespace that aggregates one sub-namespace per subdirectory.
pub const META_NAMESPACE: &str = "Meta";

/// Something the collector skipped or degraded without failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectWarning {
    /// A base-locale file could not be read or parsed; its tree is empty.
    MalformedJson { file_path: String, error: String },
    /// A directory name that cannot prefix a TypeScript interface name.
    InvalidNamespace { name: String, path: String },
    /// A raw key containing `.`, which flattens ambiguously.
    AmbiguousKey { namespace: String, key: String },
    /// The `Meta` directory could not be listed; the namespace is empty.
    UnreadableDirectory { path: String, error: String },
    /// A namespace matched an `exclude` pattern.
    Excluded { name: String, pattern: String },
}

impl CollectWarning {
    /// Informational entries only shown with `--verbose`.
    pub fn is_verbose_only(&self) -> bool {
        matches!(self, CollectWarning::Excluded { .. })
    }
}

impl fmt::Display for CollectWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectWarning::MalformedJson { file_path, error } => {
                write!(f, "Could not parse {} ({}), emitting no keys", file_path, error)
            }
            CollectWarning::InvalidNamespace { name, path } => write!(
                f,
                "Skipping namespace \"{}\" at {}: not a valid TypeScript identifier",
                name, path
            ),
            CollectWarning::AmbiguousKey { namespace, key } => write!(
                f,
                "Key \"{}\" in namespace {} contains '.', it cannot be told apart from a nested key",
                key, namespace
            ),
            CollectWarning::UnreadableDirectory { path, error } => {
                write!(f, "Could not read directory {}: {}", path, error)
            }
            CollectWarning::Excluded { name, pattern } => {
                write!(f, "Excluded namespace {} (matches \"{}\")", name, pattern)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectResult {
    pub translations: NamespaceTranslations,
    pub warnings: Vec<CollectWarning>,
}

/// Walks a locales root and parses the base-locale file of every namespace.
pub struct NamespaceCollector<'a> {
    locales_path: &'a Path,
    base_locale: &'a str,
    exclude: &'a [Pattern],
}

impl<'a> NamespaceCollector<'a> {
    pub fn new(locales_path: &'a Path, base_locale: &'a str) -> Self {
        Self {
            locales_path,
            base_locale,
            exclude: &[],
        }
    }

    pub fn with_exclude(mut self, exclude: &'a [Pattern]) -> Self {
        self.exclude = exclude;
        self
    }

    /// Collect every namespace under the locales root.
    ///
    /// Namespaces appear in file-name order. Directories without a base-locale
    /// file are skipped silently, malformed files yield an empty tree plus a
    /// warning.
    pub fn collect(&self) -> Result<CollectResult> {
        let mut result = CollectResult::default();

        for (name, dir) in subdirectories(self.locales_path).with_context(|| {
            format!(
                "Failed to read locales directory: {}",
                self.locales_path.display()
            )
        })? {
            let json_path = dir.join(format!("{}.json", self.base_locale));
            let ts_path = dir.join(format!("{}.ts", self.base_locale));

            let is_aggregate = if json_path.is_file() {
                false
            } else if name == META_NAMESPACE && ts_path.is_file() {
                true
            } else {
                continue;
            };

            if !is_valid_identifier(&name) {
                result.warnings.push(CollectWarning::InvalidNamespace {
                    name,
                    path: dir.display().to_string(),
                });
                continue;
            }

            if let Some(pattern) = self.exclude.iter().find(|p| p.matches(&name)) {
                result.warnings.push(CollectWarning::Excluded {
                    name,
                    pattern: pattern.as_str().to_string(),
                });
                continue;
            }

            let tree = if is_aggregate {
                self.aggregate_meta(&dir, &mut result.warnings)
            } else {
                self.parse_tree(&json_path, &mut result.warnings)
            };

            for key in tree.ambiguous_keys() {
                result.warnings.push(CollectWarning::AmbiguousKey {
                    namespace: name.clone(),
                    key,
                });
            }

            result.translations.insert(name, tree);
        }

        Ok(result)
    }

    /// Build the `Meta` tree: one group per subdirectory holding a base-locale file.
    fn aggregate_meta(&self, meta_dir: &Path, warnings: &mut Vec<CollectWarning>) -> TranslationTree {
        let mut tree = TranslationTree::new();

        let subdirs = match subdirectories(meta_dir) {
            Ok(subdirs) => subdirs,
            Err(e) => {
                warnings.push(CollectWarning::UnreadableDirectory {
                    path: meta_dir.display().to_string(),
                    error: e.to_string(),
                });
                return tree;
            }
        };

        for (name, dir) in subdirs {
            let json_path = dir.join(format!("{}.json", self.base_locale));
            if json_path.is_file() {
                tree.insert_group(name, self.parse_tree(&json_path, warnings));
            }
        }

        tree
    }

    fn parse_tree(&self, path: &Path, warnings: &mut Vec<CollectWarning>) -> TranslationTree {
        match parse_json_file(path) {
            Ok(tree) => tree,
            Err(e) => {
                warnings.push(CollectWarning::MalformedJson {
                    file_path: path.display().to_string(),
                    error: e.root_cause().to_string(),
                });
                TranslationTree::new()
            }
        }
    }
}

/// Immediate subdirectories of `dir`, sorted by name.
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy().to_string();
            dirs.push((name, entry.into_path()));
        }
    }
    Ok(dirs)
}
