use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, TABLE};

const CANONICAL: &str = "{ \"textTable\": [
\t{
\t\t\"textId\": \"HELLO\",
\t\t\"eng\": \"Hello\",
\t\t\"rus\": \"Привет\",
\t\t\"ukr\": \"Привіт\"
\t},
\t{
\t\t\"textId\": \"QUITGAME\",
\t\t\"eng\": \"Quit\",
\t\t\"rus\": \"Выход\"
\t},
\t{
\t\t\"textId\": \"SCORE\",
\t\t\"eng\": \"{0} scored {1}\",
\t\t\"ukr\": \"{0} набрав {1}\"
\t}
] }
";

#[test]
fn test_export_writes_canonical_table() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json", "-o", "out/canon.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Saved 3 row(s) in 8 language(s) to out/canon.json.
    ✓ No problems found

    ----- stderr -----
    ");
    assert_eq!(test.read_file("out/canon.json")?, CANONICAL);

    Ok(())
}

#[test]
fn test_export_is_stable() -> Result<()> {
    let test = CliTest::with_file("table.json", CANONICAL)?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json", "-o", "again.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Saved 3 row(s) in 8 language(s) to again.json.
    ✓ No problems found

    ----- stderr -----
    ");
    assert_eq!(test.read_file("again.json")?, CANONICAL);

    Ok(())
}

#[test]
fn test_export_keeps_line_breaks_escaped() -> Result<()> {
    let test = CliTest::with_file(
        "table.json",
        r#"{ "textTable": [ { "textId": "HI THERE", "eng": "Hello\\nWorld" } ] }"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Saved 1 row(s) in 8 language(s) to outputtexttable.json.
    ✓ No problems found

    ----- stderr -----
    ");

    let written = test.read_file("outputtexttable.json")?;
    assert!(written.contains(r#""textId": "HITHERE","#));
    assert!(written.contains(r#""eng": "Hello\nWorld""#));

    Ok(())
}

#[test]
fn test_export_keeps_translation_from_repeated_row() -> Result<()> {
    // The first row has no jpn text, so the repeated row still supplies it.
    let test = CliTest::with_file(
        "table.json",
        r#"{ "textTable": [
            { "textId": "Quit", "eng": "Quit" },
            { "textId": "quit", "eng": "Quit again", "jpn": "終了" }
        ] }"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Saved 1 row(s) in 8 language(s) to outputtexttable.json.

    ----- stderr -----
    error: element #1: duplicate textId 'quit', skipped  duplicate-text-id
      --> table.json

    ✘ 1 problem (1 error, 0 warnings)
    ");

    assert_eq!(
        test.read_file("outputtexttable.json")?,
        "{ \"textTable\": [\n\t{\n\t\t\"textId\": \"QUIT\",\n\t\t\"eng\": \"Quit\",\n\t\t\"jpn\": \"終了\"\n\t}\n] }\n"
    );

    Ok(())
}

#[test]
fn test_export_uses_configured_output() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file(".texttablerc.json", r#"{ "output": "build/table.json" }"#)?;

    assert_cmd_snapshot!(test.command().args(["export", "table.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Saved 3 row(s) in 8 language(s) to build/table.json.
    ✓ No problems found

    ----- stderr -----
    ");
    assert_eq!(test.read_file("build/table.json")?, CANONICAL);

    Ok(())
}
