use std::{fmt, str::FromStr};

use clap::ValueEnum;
use thiserror::Error;

/// Languages a text table can carry.
///
/// The declaration order is the total order used everywhere: output field
/// order, "languages after the baseline" iteration and report sorting.
/// Tags follow ISO 639-2, with `spa_mx` for Latin American Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Language {
    /// Sentinel: no language has been selected yet.
    #[value(skip)]
    Uninitialized,
    /// Pseudo-language for authoring; renders ids instead of text.
    Debug,
    Eng,
    Jpn,
    Zhs,
    Zht,
    SpaMx,
    Ara,
    Rus,
    /// Ukrainian
    Ukr,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language tag '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every language, in order.
    pub const ALL: [Language; 10] = [
        Language::Uninitialized,
        Language::Debug,
        Language::Eng,
        Language::Jpn,
        Language::Zhs,
        Language::Zht,
        Language::SpaMx,
        Language::Ara,
        Language::Rus,
        Language::Ukr,
    ];

    /// Reference language: its rows define which ids exist.
    pub const BASELINE: Language = Language::Eng;

    /// Canonical tag, used as the JSON field name and the overlay column suffix.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Uninitialized => "uninitialized",
            Language::Debug => "debug",
            Language::Eng => "eng",
            Language::Jpn => "jpn",
            Language::Zhs => "zhs",
            Language::Zht => "zht",
            Language::SpaMx => "spa_mx",
            Language::Ara => "ara",
            Language::Rus => "rus",
            Language::Ukr => "ukr",
        }
    }

    /// Exact, case-sensitive match against the canonical tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }

    /// The baseline and every language declared after it.
    ///
    /// These are the languages that carry real text in a table.
    pub fn from_baseline() -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(|lang| *lang >= Self::BASELINE)
    }

    /// Languages declared after the baseline.
    pub fn after_baseline() -> impl Iterator<Item = Language> {
        Self::ALL.into_iter().filter(|lang| *lang > Self::BASELINE)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
