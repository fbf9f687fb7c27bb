//! The generation pipeline: validate, collect, render, persist, verify.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use tempfile::NamedTempFile;

use super::collect::{CollectWarning, NamespaceCollector};
use super::render::{INTERFACES_FILE_NAME, TYPES_FILE_NAME, render_interfaces, render_types};

pub const DEFAULT_NAMESPACE: &str = "Common";
pub const DEFAULT_BASE_LOCALE: &str = "ru";

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub locales_path: PathBuf,
    pub output_dir: PathBuf,
    pub default_namespace: String,
    pub base_locale: String,
    /// Glob patterns matched against namespace names.
    pub exclude: Vec<String>,
}

impl GeneratorOptions {
    pub fn new(locales_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            locales_path: locales_path.into(),
            output_dir: output_dir.into(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            base_locale: DEFAULT_BASE_LOCALE.to_string(),
            exclude: Vec::new(),
        }
    }

    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    pub fn with_base_locale(mut self, locale: impl Into<String>) -> Self {
        self.base_locale = locale.into();
        self
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn interfaces_path(&self) -> PathBuf {
        self.output_dir.join(INTERFACES_FILE_NAME)
    }

    pub fn types_path(&self) -> PathBuf {
        self.output_dir.join(TYPES_FILE_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    pub name: String,
    pub key_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// No namespace was found; nothing was written.
    NoTranslations,
    Written {
        interfaces_path: PathBuf,
        types_path: PathBuf,
        created_output_dir: bool,
    },
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub locales_path: PathBuf,
    pub outcome: GenerateOutcome,
    pub namespaces: Vec<NamespaceSummary>,
    pub warnings: Vec<CollectWarning>,
}

impl GenerateSummary {
    pub fn is_written(&self) -> bool {
        matches!(self.outcome, GenerateOutcome::Written { .. })
    }
}

pub struct I18nTypesGenerator {
    options: GeneratorOptions,
}

impl I18nTypesGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run the whole pipeline.
    ///
    /// Finding no namespaces is not an error: the summary reports
    /// [`GenerateOutcome::NoTranslations`] and no file is touched.
    pub fn generate(&self) -> Result<GenerateSummary> {
        let options = &self.options;
        let locales_path = &options.locales_path;

        if !locales_path.exists() {
            bail!(
                "Locales directory does not exist: {}",
                locales_path.display()
            );
        }
        if !locales_path.is_dir() {
            bail!("Locales path is not a directory: {}", locales_path.display());
        }

        let exclude = compile_patterns(&options.exclude)?;
        let collected = NamespaceCollector::new(locales_path, &options.base_locale)
            .with_exclude(&exclude)
            .collect()?;

        let namespaces = collected
            .translations
            .iter()
            .map(|(name, tree)| NamespaceSummary {
                name: name.to_string(),
                key_count: tree.flatten().len(),
            })
            .collect();

        if collected.translations.is_empty() {
            return Ok(GenerateSummary {
                locales_path: locales_path.clone(),
                outcome: GenerateOutcome::NoTranslations,
                namespaces,
                warnings: collected.warnings,
            });
        }

        let created_output_dir = ensure_directory_exists(&options.output_dir)?;

        let interfaces = render_interfaces(&collected.translations);
        let types = render_types(&collected.translations, &options.default_namespace);

        let interfaces_path = options.interfaces_path();
        let types_path = options.types_path();
        write_all_or_nothing(
            &options.output_dir,
            &[
                (interfaces_path.as_path(), interfaces.as_str()),
                (types_path.as_path(), types.as_str()),
            ],
        )?;

        if !interfaces_path.is_file() || !types_path.is_file() {
            bail!("Failed to create type files in {}", options.output_dir.display());
        }

        Ok(GenerateSummary {
            locales_path: locales_path.clone(),
            outcome: GenerateOutcome::Written {
                interfaces_path,
                types_path,
                created_output_dir,
            },
            namespaces,
            warnings: collected.warnings,
        })
    }
}

/// Compile `exclude` globs, failing on the first invalid one.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'exclude': \"{}\"", pattern))
        })
        .collect()
}

/// Returns true if the directory had to be created.
fn ensure_directory_exists(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    if dir.exists() {
        bail!("Output path is not a directory: {}", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(true)
}

/// Stage every file in `dir` before replacing any target.
///
/// A failure while staging leaves all existing targets untouched; staged
/// temporary files are removed when dropped. The renames themselves run one
/// after another, so a failed second rename leaves the first target updated.
fn write_all_or_nothing(dir: &Path, files: &[(&Path, &str)]) -> Result<()> {
    for (path, _) in files {
        if path.is_dir() {
            bail!("Cannot write {}: a directory is in the way", path.display());
        }
    }

    let mut staged = Vec::with_capacity(files.len());
    for (path, content) in files {
        let mut temp = staging_file(dir, path)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        staged.push((temp, *path));
    }

    for (temp, path) in staged {
        temp.persist(path)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(())
}

/// Temporary file next to `target`, carrying the permissions `target` will keep.
///
/// An existing target passes its mode on; a new one gets the usual
/// `0o666` masked by the process umask.
fn staging_file(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".i18n-types-").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let temp = builder.tempfile_in(dir)?;
    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(temp)
}
