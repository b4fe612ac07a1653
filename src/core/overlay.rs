//! Overlay merge from delimited spreadsheet exports.
//!
//! The header row names the columns of interest as `<prefix>textId` and
//! `<prefix><tag>`; every other column is ignored. Column resolution is all
//! or nothing: if any requested column is missing, no store is touched.

use std::{collections::BTreeMap, fmt};

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

use super::{Language, NormalizedId, TextTables, normalize};
use crate::issues::{Diagnostic, Diagnostics};

pub const DEFAULT_COLUMN_PREFIX: &str = "textTable/";
pub const ID_COLUMN: &str = "textId";

/// A column the header row did not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedColumn {
    TextId,
    Language(Language),
}

impl fmt::Display for UnresolvedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedColumn::TextId => write!(f, "{ID_COLUMN}"),
            UnresolvedColumn::Language(language) => write!(f, "{language}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("unable to find {} column(s) in overlay: {}", .0.len(), join_columns(.0))]
    UnresolvedColumns(Vec<UnresolvedColumn>),
    #[error("overlay has no header row")]
    EmptyDocument,
    #[error("overlay is not valid {0} text")]
    Decode(&'static str),
    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),
    #[error("failed to read overlay rows: {0}")]
    Csv(#[from] csv::Error),
}

fn join_columns(columns: &[UnresolvedColumn]) -> String {
    columns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// How to read an overlay document.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
    pub column_prefix: String,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: UTF_8,
            column_prefix: DEFAULT_COLUMN_PREFIX.to_string(),
        }
    }
}

impl OverlayOptions {
    /// Resolve a WHATWG encoding label such as `utf-8` or `windows-1251`.
    pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, MergeError> {
        Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| MergeError::UnknownEncoding(label.to_string()))
    }
}

/// What a successful merge did.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub diagnostics: Diagnostics,
    /// Cells written per target language.
    pub merged: BTreeMap<Language, usize>,
    /// Baseline ids still without text, per target language.
    pub missing: BTreeMap<Language, Vec<NormalizedId>>,
}

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    languages: Vec<(Language, usize)>,
}

/// Merge the `targets` columns of a delimited document into `tables`.
pub fn merge_overlay(
    bytes: &[u8],
    options: &OverlayOptions,
    targets: &[Language],
    tables: &mut TextTables,
) -> Result<MergeReport, MergeError> {
    let mut targets = targets.to_vec();
    targets.sort();
    targets.dedup();

    let records = read_records(bytes, options)?;
    let Some((header, rows)) = records.split_first() else {
        return Err(MergeError::EmptyDocument);
    };
    let columns = resolve_columns(header, &options.column_prefix, &targets)?;
    tracing::debug!(rows = rows.len(), targets = ?targets, "merging overlay");

    let mut report = MergeReport::default();
    for &language in &targets {
        tables.get_or_create(language);
        report.merged.insert(language, 0);
    }

    let header_line = line_of(header, 0);
    for (index, record) in rows.iter().enumerate() {
        let row = line_of(record, index + 1) - header_line;
        let Some(raw_id) = record.get(columns.id) else {
            report.diagnostics.push(Diagnostic::ShortRow { row });
            continue;
        };
        if raw_id.trim().is_empty() {
            report.diagnostics.push(Diagnostic::EmptyTextId { row });
            continue;
        }

        let id = normalize(raw_id);
        for &(language, column) in &columns.languages {
            let Some(text) = record.get(column) else {
                report
                    .diagnostics
                    .push(Diagnostic::MissingCell { row, language });
                continue;
            };
            if text.is_empty() {
                continue;
            }
            tables.get_or_create(language).insert(id.clone(), text);
            *report.merged.entry(language).or_default() += 1;
        }
    }

    for &language in &targets {
        let missing = tables.missing_against_baseline(language);
        tables
            .get_or_create(language)
            .set_missing_ids(missing.iter().map(ToString::to_string).collect());
        if !missing.is_empty() {
            report.diagnostics.push(Diagnostic::MissingIds {
                language,
                ids: missing.clone(),
            });
        }
        report.missing.insert(language, missing);
    }

    tracing::info!(
        languages = targets.len(),
        diagnostics = report.diagnostics.len(),
        "merged overlay"
    );
    Ok(report)
}

/// Decode and split the whole document before anything is merged.
fn read_records(
    bytes: &[u8],
    options: &OverlayOptions,
) -> Result<Vec<StringRecord>, MergeError> {
    let (text, _, had_errors) = options.encoding.decode(bytes);
    if had_errors {
        return Err(MergeError::Decode(options.encoding.name()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Physical line a record starts on. Blank lines and quoted line breaks
/// count, so row numbers match what an editor shows.
fn line_of(record: &StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map_or(fallback, |position| position.line() as usize)
}

/// The id column matches any header containing `<prefix>textId`; language
/// columns must match `<prefix><tag>` exactly.
fn resolve_columns(
    header: &StringRecord,
    prefix: &str,
    targets: &[Language],
) -> Result<Columns, MergeError> {
    let id_header = format!("{prefix}{ID_COLUMN}");
    let mut id = None;
    let mut found: BTreeMap<Language, usize> = BTreeMap::new();

    for (index, cell) in header.iter().enumerate() {
        let cell = cell.trim();
        if cell.contains(&id_header) {
            id.get_or_insert(index);
            continue;
        }
        if let Some(tag) = cell.strip_prefix(prefix)
            && let Some(language) = Language::from_tag(tag)
            && targets.contains(&language)
        {
            found.entry(language).or_insert(index);
        }
    }

    let mut unresolved = Vec::new();
    if id.is_none() {
        unresolved.push(UnresolvedColumn::TextId);
    }
    unresolved.extend(
        targets
            .iter()
            .filter(|language| !found.contains_key(*language))
            .map(|&language| UnresolvedColumn::Language(language)),
    );

    match id {
        Some(id) if unresolved.is_empty() => Ok(Columns {
            id,
            languages: found.into_iter().collect(),
        }),
        _ => Err(MergeError::UnresolvedColumns(unresolved)),
    }
}
