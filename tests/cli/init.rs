use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created i18n-types.config.js (CommonJS)

    ----- stderr -----
    ");

    let content = test.read_file("i18n-types.config.js")?;
    assert!(content.starts_with("module.exports = {\n"));
    assert!(content.contains("  localesPath: \"./src/locales\",\n"));
    assert!(content.contains("  baseLocale: \"ru\",\n"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file("i18n-types.config.js", "module.exports = {};\n")?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: i18n-types.config.js already exists
    Use --force to overwrite it.
    ");
    assert_eq!(
        test.read_file("i18n-types.config.js")?,
        "module.exports = {};\n"
    );

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let test = CliTest::with_file("i18n-types.config.js", "module.exports = {};\n")?;

    let output = test.init_command().arg("--force").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.read_file("i18n-types.config.js")?.contains("outputDir"));

    Ok(())
}

#[test]
fn test_init_detects_esm_package() -> Result<()> {
    let test = CliTest::with_file("package.json", r#"{"name": "app", "type": "module"}"#)?;

    let output = test.init_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file("i18n-types.config.js")?;
    assert!(content.starts_with("export default {\n"));

    Ok(())
}

#[test]
fn test_init_json_output() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.init_command().args(["--output", "config/i18n-types.config.json"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created config/i18n-types.config.json (JSON)

    ----- stderr -----
    "
    );

    let content = test.read_file("config/i18n-types.config.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["localesPath"], "./src/locales");
    assert_eq!(parsed["outputDir"], "./types");
    assert_eq!(parsed["defaultNamespace"], "Common");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.init_command().output()?;
    test.write_file("src/locales/Common/ru.json", r#"{"title": "Заголовок"}"#)?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
    assert!(
        test.read_file("types/i18n.interfaces.d.ts")?
            .contains("'title': string;")
    );

    Ok(())
}
