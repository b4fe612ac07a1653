//! Canonical JSON output.
//!
//! Written by hand rather than through `serde_json::to_string_pretty` so the
//! layout matches the hand-maintained table files line for line: one row
//! object per baseline id, `textId` first, then languages in enumeration order.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use super::{Language, TextTables};

/// Render `tables` as a canonical text-table document.
///
/// Rows follow the baseline store's order; ids that only exist in other
/// languages are not written. A language contributes a field when it has a
/// store and an entry for the row's id.
pub fn to_json_string(tables: &TextTables) -> String {
    let mut out = String::from("{ \"textTable\": [\n");

    if let Some(baseline) = tables.get(Language::BASELINE) {
        let row_count = baseline.count();
        for (index, id) in baseline.all_ids().enumerate() {
            let fields: Vec<(Language, &str)> = tables
                .stores()
                .filter_map(|store| store.get(id).map(|text| (store.language(), text)))
                .collect();

            out.push_str("\t{\n");
            out.push_str("\t\t\"textId\": ");
            out.push_str(&quote(id));
            out.push_str(if fields.is_empty() { "\n" } else { ",\n" });

            for (field, (language, text)) in fields.iter().enumerate() {
                out.push_str("\t\t\"");
                out.push_str(language.tag());
                out.push_str("\": ");
                out.push_str(&quote(&escape_line_breaks(text)));
                out.push_str(if field + 1 < fields.len() { ",\n" } else { "\n" });
            }

            out.push_str(if index + 1 < row_count { "\t},\n" } else { "\t}\n" });
        }
    }

    out.push_str("] }\n");
    out
}

/// [`to_json_string`] as bytes.
pub fn serialize(tables: &TextTables) -> Vec<u8> {
    to_json_string(tables).into_bytes()
}

/// Write the canonical document to `path`, creating parent directories.
pub fn save_table(tables: &TextTables, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, serialize(tables))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    tracing::info!(path = %path.display(), "saved text table");
    Ok(())
}

/// CRLF becomes LF so every line break is written as a single `\n` escape.
fn escape_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// JSON string literal, with `\n`, quotes and control characters escaped.
fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
