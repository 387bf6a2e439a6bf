//! Stop types.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use super::{DisplayLanguage, Language};

/// A stop's display name in each language the database carries.
///
/// Entries whose key isn't a valid language code are dropped on load,
/// so one odd key doesn't reject the whole stop table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct LocalizedName(HashMap<Language, String>);

impl From<HashMap<String, String>> for LocalizedName {
    fn from(raw: HashMap<String, String>) -> Self {
        LocalizedName(
            raw.into_iter()
                .filter_map(|(code, text)| match Language::parse(&code) {
                    Ok(lang) => Some((lang, text)),
                    Err(e) => {
                        warn!("skipping stop name: {e}");
                        None
                    }
                })
                .collect(),
        )
    }
}

impl LocalizedName {
    /// Builds a name from `(language, text)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        LocalizedName(
            pairs
                .into_iter()
                .map(|(lang, text)| (lang, text.into()))
                .collect(),
        )
    }

    /// Returns the name in exactly `language`, if present.
    pub fn get(&self, language: &Language) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Returns the name in the requested language, else in the fallback.
    pub fn resolve(&self, language: &DisplayLanguage) -> Option<&str> {
        self.get(&language.requested)
            .or_else(|| self.get(&language.fallback))
    }

    /// Number of languages with a name.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the stop has no name in any language.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A stop from the stop table.
///
/// Only the name is needed to build stop summaries; other fields the
/// database carries (location, etc.) are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stop {
    /// Display name keyed by language
    pub name: LocalizedName,
}

impl Stop {
    /// Creates a stop with the given name.
    pub fn new(name: LocalizedName) -> Self {
        Self { name }
    }
}
