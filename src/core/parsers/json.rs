use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::core::TranslationTree;

/// Parse a base-locale JSON file into a [`TranslationTree`].
///
/// Key order follows the document (`serde_json` is built with `preserve_order`).
pub fn parse_json_file(path: &Path) -> Result<TranslationTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    parse_json_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

pub fn parse_json_str(content: &str) -> Result<TranslationTree> {
    let json: Value = serde_json::from_str(content)?;

    TranslationTree::from_json(&json)
        .ok_or_else(|| anyhow!("expected a JSON object or array at the top level"))
}
