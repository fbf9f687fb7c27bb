//! Core generation engine.
//!
//! The pipeline runs in four steps:
//!
//! 1. **Collect** (`collect`): read the base-locale file of every namespace
//!    directory into a [`TranslationTree`].
//! 2. **Flatten** (`tree`): turn nested groups into dot-joined key paths.
//! 3. **Render** (`render`): produce the interfaces and augmentation texts.
//! 4. **Persist** (`generate`): write both artifacts and verify them.

pub mod collect;
pub mod generate;
pub mod parsers;
pub mod render;
pub mod tree;

pub use collect::{CollectResult, CollectWarning, META_NAMESPACE, NamespaceCollector};
pub use generate::{
    GenerateOutcome, GenerateSummary, GeneratorOptions, I18nTypesGenerator, NamespaceSummary,
};
pub use tree::{FlattenedKey, NamespaceTranslations, TranslationNode, TranslationTree};
