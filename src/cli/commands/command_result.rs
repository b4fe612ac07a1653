use std::{collections::BTreeMap, path::PathBuf};

use crate::core::{Language, NormalizedId};
use crate::issues::{Diagnostic, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Stats,
    Merge,
    Export,
    Lookup,
    Normalize,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Stats(StatsSummary),
    Merge(MergeSummary),
    Export(ExportSummary),
    Lookup(LookupSummary),
    Normalize(NormalizeSummary),
    Init(InitSummary),
}

impl CommandSummary {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandSummary::Stats(_) => CommandKind::Stats,
            CommandSummary::Merge(_) => CommandKind::Merge,
            CommandSummary::Export(_) => CommandKind::Export,
            CommandSummary::Lookup(_) => CommandKind::Lookup,
            CommandSummary::Normalize(_) => CommandKind::Normalize,
            CommandSummary::Init(_) => CommandKind::Init,
        }
    }
}

/// Entry count of one loaded language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: Language,
    pub count: usize,
    /// Raw ids of rows without text in this language.
    pub missing: Vec<String>,
    /// Whether the missing ids are listed, not just counted.
    pub list_missing: bool,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub table: PathBuf,
    pub languages: Vec<LanguageStats>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub is_apply: bool,
    /// Cells written per merged language.
    pub merged: BTreeMap<Language, usize>,
    /// Baseline ids still untranslated after the merge.
    pub missing: BTreeMap<Language, Vec<NormalizedId>>,
    pub row_count: usize,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub row_count: usize,
    pub language_count: usize,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct NormalizeSummary {
    pub ids: Vec<NormalizedId>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// A diagnostic together with the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostic {
    pub path: String,
    pub diagnostic: Diagnostic,
}

/// Result of running texttable commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Every diagnostic the command produced, in the order it was found.
    pub diagnostics: Vec<FileDiagnostic>,
}

impl CommandResult {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.diagnostic.severity() == severity)
            .count()
    }
}
