//! File parsers for locale files and config scripts.
//!
//! - `json`: base-locale JSON file parser
//! - `script`: JavaScript config file reader (uses swc, never executes code)

pub mod json;
pub mod script;
