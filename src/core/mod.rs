//! Core text-table engine.
//!
//! Everything here works on in-memory bytes and values, apart from
//! [`save_table`]; reading files and presentation live in the `cli` layer.
//!
//! - `language`: the closed set of supported languages
//! - `normalize`: canonical text id derivation
//! - `store`: per-language entry stores and the multi-language table set
//! - `loader`: canonical JSON ingestion with per-row validation
//! - `overlay`: delimited (CSV) overlay merge
//! - `serializer`: canonical JSON output
//! - `format`: positional `{0}` argument substitution
//! - `localizer`: active-language selection and runtime lookup

pub mod format;
pub mod language;
pub mod loader;
pub mod localizer;
pub mod normalize;
pub mod overlay;
pub mod serializer;
pub mod store;

pub use format::{FormatError, format_positional};
pub use language::{Language, UnknownLanguage};
pub use loader::{LoadError, LoadOptions, Loaded, load_all_languages, load_language};
pub use localizer::{Localizer, LookupError, MAX_RECORDED_DIAGNOSTICS};
pub use normalize::{NormalizedId, normalize};
pub use overlay::{MergeError, MergeReport, OverlayOptions, UnresolvedColumn, merge_overlay};
pub use serializer::{save_table, serialize, to_json_string};
pub use store::{TextTableStore, TextTables};
