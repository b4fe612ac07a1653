//! Runtime text lookup for the active language.
//!
//! Selecting a language builds a complete store first and then publishes it
//! with a single atomic swap, so readers on other threads see either the old
//! table or the new one, never a partially loaded one.

use std::{fmt::Display, sync::Arc};

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use thiserror::Error;

use super::{
    FormatError, Language, LoadError, LoadOptions, NormalizedId, TextTableStore,
    format_positional, load_language, normalize,
};
use crate::issues::{Diagnostic, Diagnostics};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("language must be selected before looking up '{raw_id}'")]
    NotSelected { raw_id: String },
    #[error("no {language} text for '{id}'")]
    MissingText { id: NormalizedId, language: Language },
    #[error("text for '{id}' is not a valid template: {source}")]
    Format {
        id: NormalizedId,
        #[source]
        source: FormatError,
    },
}

impl LookupError {
    fn into_diagnostic(self) -> Diagnostic {
        match self {
            LookupError::NotSelected { raw_id } => {
                Diagnostic::LanguageNotSelected { text_id: raw_id }
            }
            LookupError::MissingText { id, language } => Diagnostic::MissingText {
                text_id: id,
                language,
            },
            LookupError::Format { id, source } => Diagnostic::InvalidFormat {
                text_id: id,
                reason: source.to_string(),
            },
        }
    }
}

/// Lookup diagnostics kept between drains. Later ones are only logged.
pub const MAX_RECORDED_DIAGNOSTICS: usize = 1024;

/// Owns the canonical table source and the currently active store.
pub struct Localizer {
    source: Arc<[u8]>,
    options: LoadOptions,
    active: ArcSwapOption<TextTableStore>,
    diagnostics: Mutex<Diagnostics>,
}

impl Localizer {
    /// A localizer over a canonical JSON document, with no language selected.
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self::with_options(source, LoadOptions::default())
    }

    pub fn with_options(source: impl Into<Vec<u8>>, options: LoadOptions) -> Self {
        let source: Vec<u8> = source.into();
        Self {
            source: Arc::from(source),
            options,
            active: ArcSwapOption::empty(),
            diagnostics: Mutex::new(Diagnostics::new()),
        }
    }

    /// (Re)load `language` from the source and make it active.
    ///
    /// Selecting the active language again reloads it. On error the previous
    /// selection stays in place.
    pub fn set_active_language(&self, language: Language) -> Result<Diagnostics, LoadError> {
        if language == Language::Uninitialized {
            return Err(LoadError::Unselectable(language));
        }
        let loaded = load_language(&self.source, language, &self.options)?;
        self.activate(loaded.store);
        tracing::info!(language = %language, "opened text table");
        Ok(loaded.diagnostics)
    }

    /// Make an already built store active.
    pub fn activate(&self, store: TextTableStore) {
        self.active.store(Some(Arc::new(store)));
    }

    /// The active language, or `Uninitialized` before any selection.
    pub fn active_language(&self) -> Language {
        self.with_store(TextTableStore::language)
            .unwrap_or(Language::Uninitialized)
    }

    /// Look up `raw_id` in the active language.
    pub fn try_lookup(&self, raw_id: &str) -> Result<String, LookupError> {
        let guard = self.active.load();
        let Some(store) = &*guard else {
            return Err(LookupError::NotSelected {
                raw_id: raw_id.to_string(),
            });
        };

        let id = normalize(raw_id);
        #[cfg(feature = "debug-ids")]
        if store.language() == Language::Debug {
            return Ok(format!("[{id}]"));
        }

        match store.get(&id) {
            Some(text) => Ok(text.to_string()),
            None => Err(LookupError::MissingText {
                id,
                language: store.language(),
            }),
        }
    }

    /// [`try_lookup`](Self::try_lookup) followed by positional formatting.
    pub fn try_lookup_and_format(
        &self,
        raw_id: &str,
        args: &[&dyn Display],
    ) -> Result<String, LookupError> {
        let template = self.try_lookup(raw_id)?;
        format_positional(&template, args).map_err(|source| LookupError::Format {
            id: normalize(raw_id),
            source,
        })
    }

    /// Look up `raw_id`, never failing.
    ///
    /// Before a language is selected the input comes back unchanged; an
    /// unknown id yields an empty string. Both cases record a diagnostic.
    pub fn lookup(&self, raw_id: &str) -> String {
        match self.try_lookup(raw_id) {
            Ok(text) => text,
            Err(err) => {
                let fallback = match &err {
                    LookupError::NotSelected { .. } => raw_id.to_string(),
                    _ => String::new(),
                };
                self.record(err);
                fallback
            }
        }
    }

    /// [`lookup`](Self::lookup) followed by positional formatting.
    ///
    /// A template that cannot be formatted is returned as is.
    pub fn lookup_and_format(&self, raw_id: &str, args: &[&dyn Display]) -> String {
        let template = self.lookup(raw_id);
        match format_positional(&template, args) {
            Ok(text) => text,
            Err(source) => {
                self.record(LookupError::Format {
                    id: normalize(raw_id),
                    source,
                });
                template
            }
        }
    }

    /// Number of entries in the active store.
    pub fn count(&self) -> usize {
        self.with_store(TextTableStore::count).unwrap_or(0)
    }

    /// Ids of the active store, in table order.
    pub fn all_ids(&self) -> Vec<NormalizedId> {
        self.with_store(|store| store.all_ids().cloned().collect())
            .unwrap_or_default()
    }

    pub fn exists(&self, raw_id: &str) -> bool {
        self.with_store(|store| store.exists(raw_id))
            .unwrap_or(false)
    }

    /// The active store, if any.
    pub fn active_store(&self) -> Option<Arc<TextTableStore>> {
        self.active.load_full()
    }

    /// Lookup diagnostics recorded since the last [`Localizer::take_diagnostics`].
    ///
    /// At most [`MAX_RECORDED_DIAGNOSTICS`] are kept; long-running callers
    /// should drain them periodically.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.lock().clone()
    }

    /// Drain the recorded lookup diagnostics.
    pub fn take_diagnostics(&self) -> Diagnostics {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    fn with_store<T>(&self, f: impl FnOnce(&TextTableStore) -> T) -> Option<T> {
        let guard = self.active.load();
        (*guard).as_ref().map(|store| f(Arc::as_ref(store)))
    }

    fn record(&self, err: LookupError) {
        let diagnostic = err.into_diagnostic();
        let mut recorded = self.diagnostics.lock();
        if recorded.len() < MAX_RECORDED_DIAGNOSTICS {
            recorded.push(diagnostic);
        } else {
            diagnostic.log();
        }
    }
}
