//! Recoverable diagnostics produced while loading, merging and looking up text.
//!
//! A diagnostic never aborts the operation that produced it. Each one is
//! self-contained so the reporter can print it without extra context, and
//! each one is also emitted as a `tracing` event when recorded.

use std::fmt;

use crate::core::{Language, NormalizedId};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The input document has a defect; the row was skipped.
    Error,
    /// Incomplete data or a lookup placeholder; nothing was lost.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTextId,
    DuplicateTextId,
    MissingBaselineText,
    ShortRow,
    EmptyTextId,
    MissingCell,
    MissingIds,
    LanguageNotSelected,
    MissingText,
    InvalidFormat,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingTextId => write!(f, "missing-text-id"),
            Rule::DuplicateTextId => write!(f, "duplicate-text-id"),
            Rule::MissingBaselineText => write!(f, "missing-baseline-text"),
            Rule::ShortRow => write!(f, "short-row"),
            Rule::EmptyTextId => write!(f, "empty-text-id"),
            Rule::MissingCell => write!(f, "missing-cell"),
            Rule::MissingIds => write!(f, "missing-ids"),
            Rule::LanguageNotSelected => write!(f, "language-not-selected"),
            Rule::MissingText => write!(f, "missing-text"),
            Rule::InvalidFormat => write!(f, "invalid-format"),
        }
    }
}

// ============================================================
// Diagnostic
// ============================================================

/// A single recoverable problem.
///
/// Table rows are numbered the way the source document counts them: JSON
/// elements from 0, overlay rows by line with the header as row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// JSON element without a usable `textId`.
    MissingTextId { row: usize },
    /// JSON element whose id normalizes to an already accepted one.
    DuplicateTextId { row: usize, text_id: String },
    /// JSON element without baseline text.
    MissingBaselineText { row: usize, text_id: String },
    /// Overlay row too short to contain the id column.
    ShortRow { row: usize },
    /// Overlay row with an empty id cell.
    EmptyTextId { row: usize },
    /// Overlay row too short to contain a language column.
    MissingCell { row: usize, language: Language },
    /// Baseline ids with no text in `language` after a merge.
    MissingIds {
        language: Language,
        ids: Vec<NormalizedId>,
    },
    /// Lookup attempted before any language was selected.
    LanguageNotSelected { text_id: String },
    /// Lookup of an id the active language has no text for.
    MissingText {
        text_id: NormalizedId,
        language: Language,
    },
    /// Looked-up text could not be used as a format template.
    InvalidFormat { text_id: NormalizedId, reason: String },
}

impl Diagnostic {
    pub fn rule(&self) -> Rule {
        match self {
            Diagnostic::MissingTextId { .. } => Rule::MissingTextId,
            Diagnostic::DuplicateTextId { .. } => Rule::DuplicateTextId,
            Diagnostic::MissingBaselineText { .. } => Rule::MissingBaselineText,
            Diagnostic::ShortRow { .. } => Rule::ShortRow,
            Diagnostic::EmptyTextId { .. } => Rule::EmptyTextId,
            Diagnostic::MissingCell { .. } => Rule::MissingCell,
            Diagnostic::MissingIds { .. } => Rule::MissingIds,
            Diagnostic::LanguageNotSelected { .. } => Rule::LanguageNotSelected,
            Diagnostic::MissingText { .. } => Rule::MissingText,
            Diagnostic::InvalidFormat { .. } => Rule::InvalidFormat,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::MissingTextId { .. }
            | Diagnostic::DuplicateTextId { .. }
            | Diagnostic::MissingBaselineText { .. }
            | Diagnostic::ShortRow { .. }
            | Diagnostic::EmptyTextId { .. }
            | Diagnostic::InvalidFormat { .. } => Severity::Error,
            Diagnostic::MissingCell { .. }
            | Diagnostic::MissingIds { .. }
            | Diagnostic::LanguageNotSelected { .. }
            | Diagnostic::MissingText { .. } => Severity::Warning,
        }
    }

    /// Emit this diagnostic as a log event.
    pub fn log(&self) {
        match self.severity() {
            Severity::Error => tracing::error!(rule = %self.rule(), "{}", self),
            Severity::Warning => tracing::warn!(rule = %self.rule(), "{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTextId { row } => {
                write!(f, "element #{row}: missing textId, skipped")
            }
            Diagnostic::DuplicateTextId { row, text_id } => {
                write!(f, "element #{row}: duplicate textId '{text_id}', skipped")
            }
            Diagnostic::MissingBaselineText { row, text_id } => write!(
                f,
                "element #{row}: missing {} text for '{text_id}', skipped",
                Language::BASELINE
            ),
            Diagnostic::ShortRow { row } => write!(f, "row {row}: missing textId column"),
            Diagnostic::EmptyTextId { row } => write!(f, "row {row}: missing textId"),
            Diagnostic::MissingCell { row, language } => {
                write!(f, "row {row}: missing {language} column")
            }
            Diagnostic::MissingIds { language, ids } => {
                write!(f, "{} missing ids for {language}: ", ids.len())?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(id)?;
                }
                Ok(())
            }
            Diagnostic::LanguageNotSelected { text_id } => write!(
                f,
                "language must be selected before looking up '{text_id}'"
            ),
            Diagnostic::MissingText { text_id, language } => {
                write!(f, "no {language} text for '{text_id}'")
            }
            Diagnostic::InvalidFormat { text_id, reason } => {
                write!(f, "text for '{text_id}' is not a valid template: {reason}")
            }
        }
    }
}

// ============================================================
// Diagnostics collection
// ============================================================

/// Ordered list of diagnostics from one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.0.push(diagnostic);
    }

    /// Append diagnostics that were already logged.
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.0.iter().filter(|d| d.severity() == severity).count()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
