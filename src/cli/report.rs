//! Report formatting and printing utilities.
//!
//! Diagnostics go to stderr in cargo-style format; command output goes to
//! stdout so `lookup` and `normalize` stay pipeable. Separate from core
//! logic to allow texttable to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandKind, CommandResult, CommandSummary, ExportSummary, FileDiagnostic, InitSummary,
    MergeSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::Severity;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics in cargo-style format to stderr.
pub fn report(diagnostics: &[FileDiagnostic]) {
    report_to(diagnostics, &mut io::stderr().lock());
}

/// Print diagnostics to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(diagnostics: &[FileDiagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, writer);
    }

    print_summary(diagnostics, writer);
}

/// Print a success message when no problems were found.
pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print(result: &CommandResult) {
    print_command_output(result, &mut io::stdout().lock());
    report(&result.diagnostics);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_diagnostic<W: Write>(located: &FileDiagnostic, writer: &mut W) {
    let diagnostic = &located.diagnostic;
    let severity_str = match diagnostic.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        diagnostic,
        diagnostic.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), located.path);
}

fn print_summary<W: Write>(diagnostics: &[FileDiagnostic], writer: &mut W) {
    let total_errors = diagnostics
        .iter()
        .filter(|d| d.diagnostic.severity() == Severity::Error)
        .count();
    let total_warnings = diagnostics.len() - total_errors;

    let _ = writeln!(
        writer,
        "\n{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        diagnostics.len(),
        if diagnostics.len() == 1 {
            "problem"
        } else {
            "problems"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn print_command_output<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Stats(summary) => print_stats(summary, writer),
        CommandSummary::Merge(summary) => print_merge(summary, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Lookup(summary) => {
            let _ = writeln!(writer, "{}", summary.text);
        }
        CommandSummary::Normalize(summary) => {
            for id in &summary.ids {
                let _ = writeln!(writer, "{}", id);
            }
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }

    let reports_success = matches!(
        result.kind,
        CommandKind::Stats | CommandKind::Merge | CommandKind::Export
    );
    if reports_success && result.diagnostics.is_empty() {
        print_success_to("No problems found", writer);
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}:",
        "Languages in".bold(),
        summary.table.display()
    );

    for stats in &summary.languages {
        let missing = stats.missing.len();
        if missing == 0 {
            let _ = writeln!(writer, "  {:<8}{:>6}", stats.language.tag(), stats.count);
            continue;
        }

        let _ = writeln!(
            writer,
            "  {:<8}{:>6}  {}",
            stats.language.tag(),
            stats.count,
            format!("{} missing", missing).yellow()
        );
        if stats.list_missing {
            let _ = writeln!(writer, "      {} {}", "-".dimmed(), stats.missing.join(", "));
        }
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, writer: &mut W) {
    for (language, count) in &summary.merged {
        let missing = summary.missing.get(language).map_or(0, Vec::len);
        let _ = writeln!(
            writer,
            "  - {}: {} text(s) merged, {} of {} still missing",
            language, count, missing, summary.row_count
        );
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} merged table to {}.",
            "Saved".green().bold(),
            summary.output.display()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} merged table to {}.",
            "Would write".yellow().bold(),
            summary.output.display()
        );
        let _ = writeln!(writer, "Run with {} to write it.", "--apply".cyan());
    }
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} row(s) in {} language(s) to {}.",
        "Saved".green().bold(),
        summary.row_count,
        summary.language_count,
        summary.output.display()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        print_success_to(&format!("Created {}", CONFIG_FILE_NAME), writer);
    }
}

// ============================================================
// Tests
// ============================================================
