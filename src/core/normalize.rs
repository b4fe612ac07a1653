use std::{borrow::Borrow, fmt, ops::Deref, sync::LazyLock};

use regex::Regex;

static NON_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid id filter regex"));

/// Canonical text id: uppercase ASCII letters, digits and underscores only.
///
/// Only [`normalize`] creates one, so every lookup, load and merge agrees on keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedId(String);

/// Uppercase `raw`, then drop everything outside `[A-Za-z0-9_]`.
///
/// `"Hi There!"` becomes `HITHERE`; `"hi_there"` becomes `HI_THERE`.
pub fn normalize(raw: &str) -> NormalizedId {
    let upper = raw.to_uppercase();
    NormalizedId(NON_ID_CHARS.replace_all(&upper, "").into_owned())
}

impl NormalizedId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
