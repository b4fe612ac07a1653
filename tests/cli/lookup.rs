use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, TABLE};

#[test]
fn test_lookup_formats_arguments() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    assert_cmd_snapshot!(test.command().args([
        "lookup", "table.json", "--lang", "ukr", "score", "Ann", "42",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Ann набрав 42

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_normalizes_the_id() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "table.json", "-l", "rus", "quit game!"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Выход

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_missing_text_warns() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "table.json", "--lang", "rus", "Score"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----


    ----- stderr -----
    warning: no rus text for 'SCORE'  missing-text
      --> table.json

    ✘ 1 problem (0 errors, 1 warning)
    ");

    Ok(())
}

#[test]
fn test_lookup_missing_argument_returns_template() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "table.json", "--lang", "eng", "Score", "Ann"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    {0} scored {1}

    ----- stderr -----
    error: text for 'SCORE' is not a valid template: placeholder {1} has no argument (1 given)  invalid-format
      --> table.json

    ✘ 1 problem (1 error, 0 warnings)
    ");

    Ok(())
}

#[test]
fn test_lookup_missing_table_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["lookup", "nope.json", "--lang", "eng", "Hello"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read file: nope.json: No such file or directory (os error 2)
    ");

    Ok(())
}
