//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Names that cannot be used as a namespace type in a declaration file.
const RESERVED_WORDS: &[&str] = &[
    // ECMAScript reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with",
    // strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
    // predefined type names
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "undefined",
    "unknown",
];

/// Checks if the text can be used as a TypeScript identifier prefix.
///
/// Namespace names become interface names (`<name>Namespace`), so they must
/// start with a letter, `_` or `$`, contain only ASCII word characters, and
/// not be a reserved word.
///
/// # Examples
///
/// ```
/// use i18n_typegen::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("Common"));
/// assert!(is_valid_identifier("_internal"));
/// assert!(!is_valid_identifier("user-profile"));
/// assert!(!is_valid_identifier("2fa"));
/// assert!(!is_valid_identifier("class"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(text: &str) -> bool {
    IDENTIFIER_REGEX.is_match(text) && !RESERVED_WORDS.contains(&text)
}

/// Escape text for use inside a single-quoted TypeScript string literal.
pub fn escape_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
