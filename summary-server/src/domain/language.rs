//! Display language codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language code {code:?}: {reason}")]
pub struct InvalidLanguage {
    code: String,
    reason: &'static str,
}

/// A language code used as a key into localized stop names.
///
/// Accepts a primary tag of 2-8 ASCII letters, optionally followed by
/// `-`-separated subtags of 1-8 ASCII alphanumerics (`en`, `zh`,
/// `zh-hant`). Codes are stored lower-cased, so `EN` and `en` are the
/// same language.
///
/// # Examples
///
/// ```
/// use summary_server::domain::Language;
///
/// let en = Language::parse("EN").unwrap();
/// assert_eq!(en.as_str(), "en");
///
/// assert!(Language::parse("").is_err());
/// assert!(Language::parse("e").is_err());
/// assert!(Language::parse("zh_hk").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Parse and normalize a language code.
    pub fn parse(s: &str) -> Result<Self, InvalidLanguage> {
        let invalid = |reason| InvalidLanguage {
            code: s.to_string(),
            reason,
        };

        let mut parts = s.split('-');
        let primary = parts.next().unwrap_or_default();

        if !(2..=8).contains(&primary.len()) {
            return Err(invalid("primary tag must be 2-8 letters"));
        }
        if !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid("primary tag must be ASCII letters"));
        }

        for subtag in parts {
            if !(1..=8).contains(&subtag.len()) {
                return Err(invalid("subtags must be 1-8 characters"));
            }
            if !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(invalid("subtags must be ASCII letters or digits"));
            }
        }

        Ok(Language(s.to_ascii_lowercase()))
    }

    /// English, the default display language.
    pub fn english() -> Self {
        Language("en".to_string())
    }

    /// Returns the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::english()
    }
}

impl TryFrom<String> for Language {
    type Error = InvalidLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.0
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self.0)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The language a stop name is wanted in, plus the one to use when the
/// stop has no name in the wanted language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLanguage {
    /// Language requested by the caller
    pub requested: Language,
    /// Language tried when `requested` has no entry
    pub fallback: Language,
}

impl DisplayLanguage {
    /// Request `requested`, falling back to English.
    pub fn new(requested: Language) -> Self {
        Self {
            requested,
            fallback: Language::english(),
        }
    }

    /// Set a different fallback language.
    pub fn with_fallback(mut self, fallback: Language) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for DisplayLanguage {
    fn default() -> Self {
        Self::new(Language::english())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any case variant of a valid code parses to the same language
        #[test]
        fn case_insensitive(s in "[a-zA-Z]{2,8}(-[a-zA-Z0-9]{1,8}){0,2}") {
            let upper = Language::parse(&s.to_ascii_uppercase()).unwrap();
            let lower = Language::parse(&s.to_ascii_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        /// Parsing a normalized code yields the same code
        #[test]
        fn normalized_is_fixed_point(s in "[a-zA-Z]{2,8}(-[a-zA-Z0-9]{1,8}){0,2}") {
            let lang = Language::parse(&s).unwrap();
            let again = Language::parse(lang.as_str()).unwrap();
            prop_assert_eq!(lang, again);
        }

        /// Codes containing underscores or spaces are rejected
        #[test]
        fn separators_rejected(a in "[a-z]{2}", b in "[a-z]{2}", sep in "[_ .]") {
            let code = format!("{a}{sep}{b}");
            prop_assert!(Language::parse(&code).is_err());
        }
    }
}
