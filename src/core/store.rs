use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::{Language, NormalizedId, normalize};

/// Text for one language, keyed by normalized id.
///
/// Entries keep insertion order; the baseline store's order is the order
/// the serializer writes rows in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTableStore {
    language: Language,
    entries: IndexMap<NormalizedId, String>,
    /// Ids that exist for the baseline but have no text here, in baseline order.
    missing_ids: Vec<String>,
}

impl TextTableStore {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: IndexMap::new(),
            missing_ids: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Insert or overwrite the text for `id`, returning the previous text.
    pub fn insert(&mut self, id: NormalizedId, text: impl Into<String>) -> Option<String> {
        self.entries.insert(id, text.into())
    }

    /// Text for an already normalized id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether `raw_id` has text here, after normalization.
    pub fn exists(&self, raw_id: &str) -> bool {
        self.contains(&normalize(raw_id))
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All ids, in insertion order.
    pub fn all_ids(&self) -> impl Iterator<Item = &NormalizedId> {
        self.entries.keys()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&NormalizedId, &str)> {
        self.entries.iter().map(|(id, text)| (id, text.as_str()))
    }

    pub fn missing_ids(&self) -> &[String] {
        &self.missing_ids
    }

    pub(crate) fn push_missing(&mut self, raw_id: impl Into<String>) {
        self.missing_ids.push(raw_id.into());
    }

    /// Drop every missing raw id that normalizes to `id`.
    pub(crate) fn remove_missing(&mut self, id: &str) {
        self.missing_ids.retain(|raw| normalize(raw).as_str() != id);
    }

    pub(crate) fn set_missing_ids(&mut self, ids: Vec<String>) {
        self.missing_ids = ids;
    }
}

/// Stores for every loaded language.
///
/// Iteration follows [`Language`] order, which is also the field order of
/// serialized rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTables {
    stores: BTreeMap<Language, TextTableStore>,
}

impl TextTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a store, replacing any previous store for its language.
    pub fn insert(&mut self, store: TextTableStore) -> Option<TextTableStore> {
        self.stores.insert(store.language(), store)
    }

    pub fn get(&self, language: Language) -> Option<&TextTableStore> {
        self.stores.get(&language)
    }

    pub fn get_mut(&mut self, language: Language) -> Option<&mut TextTableStore> {
        self.stores.get_mut(&language)
    }

    /// Store for `language`, created empty when absent.
    pub fn get_or_create(&mut self, language: Language) -> &mut TextTableStore {
        self.stores
            .entry(language)
            .or_insert_with(|| TextTableStore::new(language))
    }

    pub fn baseline(&self) -> Option<&TextTableStore> {
        self.get(Language::BASELINE)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.stores.contains_key(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.stores.keys().copied()
    }

    pub fn stores(&self) -> impl Iterator<Item = &TextTableStore> {
        self.stores.values()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Baseline ids with no entry for `language`, in baseline order.
    ///
    /// Every baseline id is missing when `language` has no store; nothing is
    /// missing when there is no baseline.
    pub fn missing_against_baseline(&self, language: Language) -> Vec<NormalizedId> {
        let Some(baseline) = self.baseline() else {
            return Vec::new();
        };
        let store = self.get(language);
        baseline
            .all_ids()
            .filter(|id| !store.is_some_and(|s| s.contains(id)))
            .cloned()
            .collect()
    }
}
