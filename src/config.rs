use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::GeneratorOptions;
use crate::core::generate::{DEFAULT_BASE_LOCALE, DEFAULT_NAMESPACE};
use crate::core::parsers::script::parse_config_script;

/// File name written by `init` when no path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "i18n-types.config.js";

/// Recognized config file names, in lookup order within one directory.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "i18n-types.config.js",
    "i18n-types.config.cjs",
    "i18n-types.config.mjs",
    "i18n-types.config.json",
    ".i18n-types.config.js",
    ".i18n-types.config.json",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_path")]
    pub locales_path: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Fields this version does not know about (e.g. `watch`). Kept, never interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_locales_path() -> String {
    "./src/locales".to_string()
}

fn default_output_dir() -> String {
    "./types".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_base_locale() -> String {
    DEFAULT_BASE_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_path: default_locales_path(),
            output_dir: default_output_dir(),
            default_namespace: default_namespace(),
            base_locale: default_base_locale(),
            exclude: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl Config {
    /// Build a config from raw key/value pairs, keeping every field that decodes.
    ///
    /// Known fields with the wrong type keep their default and produce a
    /// warning; unknown fields go to `extra`.
    pub fn from_values(values: Map<String, Value>) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        for (key, value) in values {
            match key.as_str() {
                "localesPath" => decode_field(&mut config.locales_path, value, &key, &mut warnings),
                "outputDir" => decode_field(&mut config.output_dir, value, &key, &mut warnings),
                "defaultNamespace" => {
                    decode_field(&mut config.default_namespace, value, &key, &mut warnings)
                }
                "baseLocale" => decode_field(&mut config.base_locale, value, &key, &mut warnings),
                "exclude" => decode_field(&mut config.exclude, value, &key, &mut warnings),
                _ => {
                    config.extra.insert(key, value);
                }
            }
        }

        (config, warnings)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `exclude` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'exclude': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Resolve into generator options, joining relative paths onto `base_dir`.
    pub fn to_generator_options(&self, base_dir: &Path) -> GeneratorOptions {
        GeneratorOptions::new(
            resolve_path(base_dir, &self.locales_path),
            resolve_path(base_dir, &self.output_dir),
        )
        .with_default_namespace(&self.default_namespace)
        .with_base_locale(&self.base_locale)
        .with_exclude(self.exclude.clone())
    }
}

/// Join `path` onto `base_dir`, dropping `.` components.
fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let relative: PathBuf = Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        base_dir.to_path_buf()
    } else {
        base_dir.join(relative)
    }
}

fn decode_field<T: DeserializeOwned>(
    slot: &mut T,
    value: Value,
    key: &str,
    warnings: &mut Vec<String>,
) {
    match serde_json::from_value(value) {
        Ok(decoded) => *slot = decoded,
        Err(e) => warnings.push(format!("Ignoring invalid '{}': {}", key, e)),
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub source: Option<PathBuf>,
    /// Problems that did not stop loading (unparsable file, skipped fields).
    pub warnings: Vec<String>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.source.is_some()
    }
}

/// Load configuration, reading the file from disk on every call.
///
/// With `explicit_path` the file must exist; otherwise the nearest recognized
/// config file above `start_dir` is used, falling back to defaults.
pub fn load_config(explicit_path: Option<&Path>, start_dir: &Path) -> Result<ConfigLoadResult> {
    let path = match explicit_path {
        Some(path) => {
            let path = start_dir.join(path);
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            Some(path)
        }
        None => find_config_file(start_dir),
    };

    let Some(path) = path else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = match read_config_values(&path) {
        Ok((values, mut warnings)) => {
            let (config, field_warnings) = Config::from_values(values);
            warnings.extend(field_warnings);
            (config, warnings)
        }
        Err(e) => (
            Config::default(),
            vec![format!(
                "Could not load config file {}: {:#}",
                path.display(),
                e
            )],
        ),
    };
    config.validate()?;

    Ok(ConfigLoadResult {
        config,
        source: Some(path),
        warnings,
    })
}

/// Read the raw object out of a config file, by extension.
fn read_config_values(path: &Path) -> Result<(Map<String, Value>, Vec<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => match serde_json::from_str(&content)? {
            Value::Object(values) => Ok((values, Vec::new())),
            _ => Err(anyhow!("expected a JSON object")),
        },
        Some("js" | "cjs" | "mjs" | "ts") => {
            let script = parse_config_script(content, &path.to_string_lossy())?;
            Ok((script.values, script.warnings))
        }
        _ => Err(anyhow!("unsupported config file extension")),
    }
}

/// Output format for a scaffolded config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    CommonJs,
    EsModule,
}

/// Pick the scaffold format for `path`.
///
/// `.json`, `.cjs` and `.mjs` decide by themselves; anything else follows the
/// `"type"` field of the nearest `package.json`.
pub fn detect_config_format(path: &Path) -> ConfigFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ConfigFormat::Json,
        Some("cjs") => ConfigFormat::CommonJs,
        Some("mjs") => ConfigFormat::EsModule,
        _ => {
            let start = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            if is_esm_package(start) {
                ConfigFormat::EsModule
            } else {
                ConfigFormat::CommonJs
            }
        }
    }
}

/// Whether the nearest `package.json` declares `"type": "module"`.
fn is_esm_package(start_dir: &Path) -> bool {
    let Ok(mut current) = start_dir.canonicalize() else {
        return false;
    };

    loop {
        let manifest = current.join("package.json");
        if manifest.is_file() {
            return fs::read_to_string(&manifest)
                .ok()
                .and_then(|content| serde_json::from_str::<Value>(&content).ok())
                .is_some_and(|json| json.get("type").and_then(Value::as_str) == Some("module"));
        }
        if current.join(".git").exists() || !current.pop() {
            return false;
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Default config as a script, for CommonJS or ES module projects.
pub fn default_config_script(format: ConfigFormat) -> Result<String> {
    let config = Config::default();
    let quote = |s: &str| serde_json::to_string(s).context("Failed to generate default config.");

    let body = format!(
        "  // Path to your locales directory\n  localesPath: {},\n\n  \
         // Output directory for generated types\n  outputDir: {},\n\n  \
         // Default namespace for i18next\n  defaultNamespace: {},\n\n  \
         // Base locale to use for type generation\n  baseLocale: {},\n\n  \
         // Namespaces to skip (glob patterns)\n  exclude: [],\n",
        quote(&config.locales_path)?,
        quote(&config.output_dir)?,
        quote(&config.default_namespace)?,
        quote(&config.base_locale)?,
    );

    let export = match format {
        ConfigFormat::EsModule => "export default",
        ConfigFormat::CommonJs | ConfigFormat::Json => "module.exports =",
    };
    Ok(format!("{} {{\n{}}};\n", export, body))
}

/// Default config file content for the given format.
pub fn default_config_content(format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Json => default_config_json().map(|json| json + "\n"),
        ConfigFormat::CommonJs | ConfigFormat::EsModule => default_config_script(format),
    }
}
