//! Rendering of the two declaration artifacts.
//!
//! Both renderers are pure: the same [`NamespaceTranslations`] and default
//! namespace always produce byte-identical text.

use std::fmt::Write;

use super::NamespaceTranslations;
use crate::utils::escape_single_quoted;

/// File holding one interface per namespace.
pub const INTERFACES_FILE_NAME: &str = "i18n.interfaces.d.ts";

/// File holding the module augmentation and key union.
pub const TYPES_FILE_NAME: &str = "i18n.d.ts";

/// Marker placed at the top of every generated file.
pub const GENERATED_MARKER: &str = "// AUTO-GENERATED FILE. DO NOT EDIT.";

/// Prefix of every entry in the `TranslationKey` union.
pub const KEY_PREFIX: &str = "l:";

const INTERFACES_IMPORT_PATH: &str = "./i18n.interfaces";

/// Interface name generated for a namespace.
pub fn interface_name(namespace: &str) -> String {
    format!("{}Namespace", namespace)
}

/// Render `i18n.interfaces.d.ts`.
pub fn render_interfaces(translations: &NamespaceTranslations) -> String {
    let blocks: Vec<String> = translations
        .iter()
        .map(|(namespace, tree)| {
            let mut block = format!("export interface {} {{\n", interface_name(namespace));
            for key in tree.flatten() {
                let _ = writeln!(block, "  '{}': string;", escape_single_quoted(&key.path));
            }
            block.push('}');
            block
        })
        .collect();

    format!(
        "/* eslint-disable */\n{}\n\n{}\n",
        GENERATED_MARKER,
        blocks.join("\n\n")
    )
}

/// Render `i18n.d.ts`.
pub fn render_types(translations: &NamespaceTranslations, default_namespace: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", GENERATED_MARKER);
    out.push_str("import {\n");
    for namespace in translations.names() {
        let _ = writeln!(out, "  {},", interface_name(namespace));
    }
    let _ = writeln!(out, "}} from '{}';", INTERFACES_IMPORT_PATH);
    out.push('\n');

    out.push_str("declare module 'i18next' {\n");
    out.push_str("  interface CustomTypeOptions {\n");
    let _ = writeln!(
        out,
        "    defaultNS: '{}';",
        escape_single_quoted(default_namespace)
    );
    out.push_str("    resources: {\n");
    for namespace in translations.names() {
        let _ = writeln!(out, "      {}: {};", namespace, interface_name(namespace));
    }
    out.push_str("    };\n");
    out.push_str("  }\n");
    out.push_str("}\n\n");

    let namespaces: Vec<&str> = translations.names().collect();
    let _ = writeln!(
        out,
        "export type TranslationNamespace = {};\n",
        union_or_never(&namespaces.join(" | "))
    );

    let keys = static_keys(translations);
    if keys.is_empty() {
        out.push_str("type StaticTranslationKey = never;\n\n");
    } else {
        out.push_str("type StaticTranslationKey =\n");
        let last = keys.len() - 1;
        for (i, key) in keys.iter().enumerate() {
            let terminator = if i == last { ";" } else { "" };
            let _ = writeln!(out, "  | '{}'{}", escape_single_quoted(key), terminator);
        }
        out.push('\n');
    }

    out.push_str(TYPES_TAIL);
    out
}

/// Every `l:<namespace>.<key>` token, namespace by namespace.
pub fn static_keys(translations: &NamespaceTranslations) -> Vec<String> {
    translations
        .iter()
        .flat_map(|(namespace, tree)| {
            tree.flatten()
                .into_iter()
                .map(move |key| format!("{}{}.{}", KEY_PREFIX, namespace, key.path))
        })
        .collect()
}

fn union_or_never(union: &str) -> &str {
    if union.is_empty() { "never" } else { union }
}

const TYPES_TAIL: &str = r#"export type TranslationKey = StaticTranslationKey;

export interface TranslationOptions {
  defaultValue?: string;
  count?: number;
  context?: string;
  replace?: Record<string, unknown>;
  [key: string]: any;
}

declare module 'i18next' {
  interface TFunction {
    (key: TranslationKey, options?: TranslationOptions): string;
  }
}

declare module 'react-i18next' {
  interface UseTranslationResponse<Ns extends Namespace = DefaultNamespace> {
    t: (key: TranslationKey, options?: TranslationOptions) => string;
    i18n: typeof i18n;
    ready: boolean;
  }

  export function useTranslation<Ns extends Namespace = DefaultNamespace>(
    ns?: Ns | Ns[],
    options?: UseTranslationOptions<Ns>
  ): UseTranslationResponse<Ns>;
}

export interface TypedTFunction {
  (key: TranslationKey, options?: TranslationOptions): string;
}

// Module augmentation for i18n-types-generator hooks
declare module 'i18n-types-generator/hooks' {
  interface TypedTFunction<T extends string = string> {
    (key: T, options?: TranslationOptions): string;
  }

  const t: TypedTFunction<StaticTranslationKey>;

  function useTranslation<T extends string = StaticTranslationKey>(): {
    t: TypedTFunction<T>;
    i18n: any
  };
}

declare module 'i18n-types-generator/react' {
  interface TypedTFunction<T extends string = string> {
    (key: T, options?: TranslationOptions): string;
  }

  const t: TypedTFunction<StaticTranslationKey>;

  function useTranslation<T extends string = StaticTranslationKey>(): {
    t: TypedTFunction<T>;
    i18n: any
  };
}
"#;
