//! Canonical JSON ingestion.
//!
//! The document shape is `{ "textTable": [ { "textId": ..., "<tag>": ... }, ... ] }`.
//! Structural problems abort the load; problems with single rows are recorded
//! as diagnostics and the row is skipped.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use super::{Language, NormalizedId, TextTableStore, TextTables, normalize};
use crate::issues::{Diagnostic, Diagnostics};

pub const TABLE_KEY: &str = "textTable";
pub const TEXT_ID_KEY: &str = "textId";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("text table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("text table root must be a JSON object")]
    RootNotObject,
    #[error("text table has no \"textTable\" array")]
    MissingTable,
    #[error("{0} cannot be selected as a language")]
    Unselectable(Language),
}

/// Knobs for [`load_language`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Rows at or after this index are extras: they may override earlier
    /// rows without being reported as duplicates.
    pub first_extra_row: Option<usize>,
}

impl LoadOptions {
    fn is_extra(&self, row: usize) -> bool {
        self.first_extra_row.is_some_and(|first| row >= first)
    }
}

/// Result of loading one language.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub store: TextTableStore,
    pub diagnostics: Diagnostics,
}

/// Load the text for `language` from a canonical JSON document.
pub fn load_language(
    bytes: &[u8],
    language: Language,
    options: &LoadOptions,
) -> Result<Loaded, LoadError> {
    let rows = parse_rows(bytes)?;
    let loaded = load_rows(&rows, language, options, true);
    tracing::debug!(
        language = %language,
        entries = loaded.store.count(),
        missing = loaded.store.missing_ids().len(),
        "loaded text table"
    );
    Ok(loaded)
}

/// Load the baseline and every language after it from one document.
pub fn load_all_languages(
    bytes: &[u8],
    options: &LoadOptions,
) -> Result<(TextTables, Diagnostics), LoadError> {
    let rows = parse_rows(bytes)?;
    let mut tables = TextTables::new();
    let mut diagnostics = Diagnostics::new();

    for language in Language::from_baseline() {
        // Row problems do not depend on the language; report them once.
        let loaded = load_rows(&rows, language, options, language.is_baseline());
        tracing::debug!(
            language = %language,
            entries = loaded.store.count(),
            missing = loaded.store.missing_ids().len(),
            "loaded text table"
        );
        diagnostics.extend(loaded.diagnostics);
        tables.insert(loaded.store);
    }

    Ok((tables, diagnostics))
}

fn parse_rows(bytes: &[u8]) -> Result<Vec<Value>, LoadError> {
    let document: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut root) = document else {
        return Err(LoadError::RootNotObject);
    };
    match root.remove(TABLE_KEY) {
        Some(Value::Array(rows)) => Ok(rows),
        _ => Err(LoadError::MissingTable),
    }
}

fn load_rows(
    rows: &[Value],
    language: Language,
    options: &LoadOptions,
    report: bool,
) -> Loaded {
    let mut store = TextTableStore::new(language);
    let mut diagnostics = Diagnostics::new();
    let mut skip = |diagnostic: Diagnostic| {
        if report {
            diagnostics.push(diagnostic);
        }
    };
    // Normalized form of every id pushed to `missing_ids`.
    let mut missing: HashSet<NormalizedId> = HashSet::new();

    for (row, element) in rows.iter().enumerate() {
        // `get` yields None for non-object elements, which counts as a missing id.
        let Some(text_id) = element.get(TEXT_ID_KEY).and_then(Value::as_str) else {
            skip(Diagnostic::MissingTextId { row });
            continue;
        };

        let id = normalize(text_id);
        // Duplicates are judged against this language's own entries.
        if !options.is_extra(row) && store.contains(&id) {
            skip(Diagnostic::DuplicateTextId {
                row,
                text_id: text_id.to_string(),
            });
            continue;
        }

        if text_for(element, Language::BASELINE).is_none() {
            skip(Diagnostic::MissingBaselineText {
                row,
                text_id: text_id.to_string(),
            });
            continue;
        }

        match text_for(element, language) {
            Some(text) => {
                if missing.remove(&id) {
                    store.remove_missing(&id);
                }
                store.insert(id, unescape_newlines(text));
            }
            // Already has text, or already listed as missing.
            None if store.contains(&id) || missing.contains(&id) => {}
            None => {
                store.push_missing(text_id);
                missing.insert(id);
            }
        }
    }

    Loaded { store, diagnostics }
}

/// Text for `language`; null and non-string values count as absent.
fn text_for(element: &Value, language: Language) -> Option<&str> {
    element.get(language.tag()).and_then(Value::as_str)
}

/// The table stores line breaks as the two characters `\n`.
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
