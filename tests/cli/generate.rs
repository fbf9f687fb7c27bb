use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

const INTERFACES: &str = "types/i18n.interfaces.d.ts";
const TYPES: &str = "types/i18n.d.ts";

fn project_with_locales() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "src/locales/Common/ru.json",
        r#"{"welcome": "Добро пожаловать", "hello": {"world": "Привет, мир"}}"#,
    )?;
    test.write_file(
        "src/locales/Auth/ru.json",
        r#"{"login": "Войти", "logout": "Выйти"}"#,
    )?;
    Ok(test)
}

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = project_with_locales()?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated type files for 2 namespaces
          --> [ROOT]/types/i18n.interfaces.d.ts
          --> [ROOT]/types/i18n.d.ts

        ----- stderr -----
        ");
    });

    let interfaces = test.read_file(INTERFACES)?;
    assert_eq!(
        interfaces,
        "/* eslint-disable */\n\
         // AUTO-GENERATED FILE. DO NOT EDIT.\n\
         \n\
         export interface AuthNamespace {\n  'login': string;\n  'logout': string;\n}\n\
         \n\
         export interface CommonNamespace {\n  'welcome': string;\n  'hello.world': string;\n}\n"
    );

    let types = test.read_file(TYPES)?;
    assert!(types.starts_with("// AUTO-GENERATED FILE. DO NOT EDIT.\n"));
    assert!(types.contains("    defaultNS: 'Common';\n"));
    assert!(types.contains("      Auth: AuthNamespace;\n"));
    assert!(types.contains("export type TranslationNamespace = Auth | Common;"));
    for key in [
        "l:Auth.login",
        "l:Auth.logout",
        "l:Common.welcome",
        "l:Common.hello.world",
    ] {
        assert!(types.contains(&format!("  | '{}'", key)), "missing {}", key);
    }

    Ok(())
}

#[test]
fn test_generate_missing_locales() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Locales directory does not exist: [ROOT]/src/locales
        ");
    });
    assert!(!test.root().join("types").exists());

    Ok(())
}

#[test]
fn test_generate_empty_locales_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/locales/README.md", "# Locales")?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----

        ----- stderr -----
        warning: No translation files found in [ROOT]/src/locales
        ");
    });
    assert!(!test.root().join(INTERFACES).exists());
    assert!(!test.root().join(TYPES).exists());

    Ok(())
}

#[test]
fn test_generate_meta_namespace() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/Meta/ru.ts", "")?;
    test.write_file("src/locales/Meta/Foo/ru.json", r#"{"bar": "baz"}"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated type files for 1 namespace
          --> [ROOT]/types/i18n.interfaces.d.ts
          --> [ROOT]/types/i18n.d.ts

        ----- stderr -----
        ");
    });

    let interfaces = test.read_file(INTERFACES)?;
    assert!(interfaces.contains("export interface MetaNamespace {\n  'Foo.bar': string;\n}"));
    assert!(test.read_file(TYPES)?.contains("  | 'l:Meta.Foo.bar';"));

    Ok(())
}

#[test]
fn test_generate_skips_reserved_word_namespace() -> Result<()> {
    let test = project_with_locales()?;
    test.write_file("src/locales/class/ru.json", r#"{"name": "Имя"}"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated type files for 2 namespaces
          --> [ROOT]/types/i18n.interfaces.d.ts
          --> [ROOT]/types/i18n.d.ts

        ----- stderr -----
        warning: Skipping namespace "class" at [ROOT]/src/locales/class: not a valid TypeScript identifier
        "#);
    });

    let types = test.read_file(TYPES)?;
    assert!(types.contains("export type TranslationNamespace = Auth | Common;"));
    assert!(!test.read_file(INTERFACES)?.contains("classNamespace"));

    Ok(())
}

#[test]
fn test_generate_malformed_json_emits_empty_interface() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/Common/ru.json", r#"{"welcome": "#)?;
    test.write_file("src/locales/Auth/ru.json", r#"{"login": "Войти"}"#)?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("warning: Could not parse"));

    let interfaces = test.read_file(INTERFACES)?;
    assert!(interfaces.contains("export interface CommonNamespace {\n}"));
    assert!(interfaces.contains("export interface AuthNamespace {\n  'login': string;\n}"));

    Ok(())
}

#[test]
fn test_generate_reads_json_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-types.config.json",
        r#"{"localesPath": "./i18n", "outputDir": "./generated", "baseLocale": "en"}"#,
    )?;
    test.write_file("i18n/Common/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("i18n/Common/ru.json", r#"{"other": "Другое"}"#)?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let interfaces = test.read_file("generated/i18n.interfaces.d.ts")?;
    assert!(interfaces.contains("'title': string;"));
    assert!(!interfaces.contains("'other'"));

    Ok(())
}

#[test]
fn test_generate_reads_js_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n-types.config.js",
        r#"const { defineConfig } = require("./helpers");

module.exports = defineConfig({
  localesPath: "./locales",
  outputDir: "./src/@types",
  defaultNamespace: "Auth",
  watch: process.env.WATCH === "1",
});
"#,
    )?;
    test.write_file("locales/Auth/ru.json", r#"{"login": "Войти"}"#)?;

    let mut cmd = test.command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(&mut cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated type files for 1 namespace
          --> [ROOT]/src/@types/i18n.interfaces.d.ts
          --> [ROOT]/src/@types/i18n.d.ts

        ----- stderr -----
        warning: Skipped non-literal value for `watch`
        ");
    });

    let types = test.read_file("src/@types/i18n.d.ts")?;
    assert!(types.contains("    defaultNS: 'Auth';\n"));

    Ok(())
}

#[test]
fn test_generate_cli_overrides_config() -> Result<()> {
    let test = project_with_locales()?;
    test.write_file(
        "i18n-types.config.json",
        r#"{"localesPath": "./missing", "defaultNamespace": "Auth"}"#,
    )?;

    let output = test
        .command()
        .args(["--locales", "src/locales", "--output", "out"])
        .args(["--default-namespace", "Common"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let types = test.read_file("out/i18n.d.ts")?;
    assert!(types.contains("    defaultNS: 'Common';\n"));
    assert!(!test.root().join(TYPES).exists());

    Ok(())
}

#[test]
fn test_generate_explicit_config_not_found() -> Result<()> {
    let test = project_with_locales()?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command().args(["--config", "nope.json"]), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Config file not found: [ROOT]/nope.json
        ");
    });

    Ok(())
}

#[test]
fn test_generate_verbose_lists_namespaces() -> Result<()> {
    let test = project_with_locales()?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command().arg("--verbose"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Configuration:
          Config file: (defaults)
          Locales path: [ROOT]/src/locales
          Output directory: [ROOT]/types
          Default namespace: Common
          Base locale: ru

        Created directory: [ROOT]/types
          Auth: 2 keys
          Common: 2 keys
        ✓ Generated type files for 2 namespaces
          --> [ROOT]/types/i18n.interfaces.d.ts
          --> [ROOT]/types/i18n.d.ts

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = project_with_locales()?;

    assert!(test.command().output()?.status.success());
    let first = (test.read_file(INTERFACES)?, test.read_file(TYPES)?);

    assert!(test.command().output()?.status.success());
    let second = (test.read_file(INTERFACES)?, test.read_file(TYPES)?);

    assert_eq!(first, second);

    Ok(())
}
