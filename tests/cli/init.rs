use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, TABLE};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .texttablerc.json

    ----- stderr -----
    ");

    let content = test.read_file(".texttablerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["columnPrefix"], "textTable/");
    assert_eq!(parsed["delimiter"], ",");
    assert_eq!(parsed["encoding"], "utf-8");
    assert_eq!(parsed["missingReportThreshold"], 10);
    assert_eq!(parsed["output"], "outputtexttable.json");
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".texttablerc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .texttablerc.json already exists
    ");
    assert_eq!(test.read_file(".texttablerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Saved 3 row(s) in 8 language(s) to outputtexttable.json.
    ✓ No problems found

    ----- stderr -----
    ");
    assert!(test.root().join("outputtexttable.json").exists());

    Ok(())
}
