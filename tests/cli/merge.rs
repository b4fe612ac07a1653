use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, TABLE};

const JPN_OVERLAY: &str = "\
textTable/textId,notes,textTable/jpn
Hello,greeting,こんにちは
Quit Game,,終了
Score,,\"{0} が {1} 点\"
";

#[test]
fn test_merge_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file("jpn.csv", JPN_OVERLAY)?;

    assert_cmd_snapshot!(test.command().args(["merge", "table.json", "jpn.csv", "--lang", "jpn"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      - jpn: 3 text(s) merged, 0 of 3 still missing
    Would write merged table to outputtexttable.json.
    Run with --apply to write it.
    ✓ No problems found

    ----- stderr -----
    ");
    assert!(!test.root().join("outputtexttable.json").exists());

    Ok(())
}

#[test]
fn test_merge_apply_writes_table() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file("jpn.csv", JPN_OVERLAY)?;

    assert_cmd_snapshot!(test.command().args([
        "merge",
        "table.json",
        "jpn.csv",
        "--lang",
        "jpn",
        "--apply",
        "-o",
        "merged.json",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      - jpn: 3 text(s) merged, 0 of 3 still missing
    Saved merged table to merged.json.
    ✓ No problems found

    ----- stderr -----
    ");

    let merged = test.read_file("merged.json")?;
    assert!(merged.contains("\t\t\"eng\": \"Hello\",\n\t\t\"jpn\": \"こんにちは\",\n\t\t\"rus\": \"Привет\","));
    assert!(merged.contains("\t\t\"jpn\": \"{0} が {1} 点\",\n\t\t\"ukr\""));

    assert_cmd_snapshot!(test.command().args(["lookup", "merged.json", "--lang", "jpn", "score", "A", "3"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A が 3 点

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_merge_reports_row_problems_and_missing_ids() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file(
        "rus.csv",
        "\
textTable/textId,textTable/rus
Hello,Здравствуйте
,Пусто
Score
",
    )?;

    assert_cmd_snapshot!(test.command().args(["merge", "table.json", "rus.csv", "--lang", "rus"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
      - rus: 1 text(s) merged, 1 of 3 still missing
    Would write merged table to outputtexttable.json.
    Run with --apply to write it.

    ----- stderr -----
    error: row 2: missing textId  empty-text-id
      --> rus.csv
    warning: row 3: missing rus column  missing-cell
      --> rus.csv
    warning: 1 missing ids for rus: SCORE  missing-ids
      --> rus.csv

    ✘ 3 problems (1 error, 2 warnings)
    ");

    Ok(())
}

#[test]
fn test_merge_row_numbers_skip_blank_lines() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file(
        "ukr.csv",
        "textTable/textId,textTable/ukr\nQuit Game,Вихід\n\n,Пусто\n",
    )?;

    assert_cmd_snapshot!(test.command().args(["merge", "table.json", "ukr.csv", "--lang", "ukr"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
      - ukr: 1 text(s) merged, 0 of 3 still missing
    Would write merged table to outputtexttable.json.
    Run with --apply to write it.

    ----- stderr -----
    error: row 3: missing textId  empty-text-id
      --> ukr.csv

    ✘ 1 problem (1 error, 0 warnings)
    ");

    Ok(())
}

#[test]
fn test_merge_unresolved_columns_abort() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file("jpn.csv", JPN_OVERLAY)?;

    assert_cmd_snapshot!(test.command().args([
        "merge", "table.json", "jpn.csv", "--lang", "ukr", "--lang", "rus", "--apply",
    ]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to merge overlay: jpn.csv: unable to find 2 column(s) in overlay: rus, ukr
    ");
    assert!(!test.root().join("outputtexttable.json").exists());

    Ok(())
}

#[test]
fn test_merge_custom_prefix_delimiter_and_encoding() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    let (overlay, _, _) =
        encoding_rs::WINDOWS_1251.encode("sheet/textId;sheet/ukr\nQuit Game;Вихід\n");
    test.write_file("ukr.csv", overlay)?;

    assert_cmd_snapshot!(test.command().args([
        "merge",
        "table.json",
        "ukr.csv",
        "--lang",
        "ukr",
        "--prefix",
        "sheet/",
        "--delimiter",
        ";",
        "--encoding",
        "windows-1251",
        "--apply",
    ]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      - ukr: 1 text(s) merged, 0 of 3 still missing
    Saved merged table to outputtexttable.json.
    ✓ No problems found

    ----- stderr -----
    ");

    let merged = test.read_file("outputtexttable.json")?;
    assert!(merged.contains("\"ukr\": \"Вихід\""));

    Ok(())
}

#[test]
fn test_merge_options_from_config() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file(
        ".texttablerc.json",
        r#"{ "columnPrefix": "", "delimiter": "tab", "output": "out.json" }"#,
    )?;
    test.write_file("ara.tsv", "textId\tara\nHello\tمرحبا\n")?;

    assert_cmd_snapshot!(test.command().args(["merge", "table.json", "ara.tsv", "-l", "ara", "--apply"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      - ara: 1 text(s) merged, 2 of 3 still missing
    Saved merged table to out.json.

    ----- stderr -----
    warning: 2 missing ids for ara: QUITGAME, SCORE  missing-ids
      --> ara.tsv

    ✘ 1 problem (0 errors, 1 warning)
    ");

    assert!(test.read_file("out.json")?.contains("\"ara\": \"مرحبا\""));

    Ok(())
}

#[test]
fn test_merge_rejects_invalid_encoding_bytes() -> Result<()> {
    let test = CliTest::with_file("table.json", TABLE)?;
    test.write_file("bad.csv", b"textTable/textId,textTable/jpn\nHello,\xff\xfe\n")?;

    assert_cmd_snapshot!(test.command().args(["merge", "table.json", "bad.csv", "--lang", "jpn"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to merge overlay: bad.csv: overlay is not valid UTF-8 text
    ");

    Ok(())
}
