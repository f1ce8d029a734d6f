//! Localization tables for the mod's player-facing strings.
//!
//! One table is selected at startup from a fixed set of shipped language
//! codes. Every key the mod uses must resolve at load time; a hole in a
//! bundle is a packaging error, not a runtime event.

use serde_json::Value;
use thiserror::Error;

use crate::constants::{
    KEY_BOOK_TITLE, KEY_MENU_NO, KEY_MENU_YES, KEY_MSG_BOOK_PURCHASED, KEY_MSG_QUEST_COMPLETED,
    KEY_MSG_QUEST_GIVEN, KEY_MSG_REWARD_RECEIVED, KEY_QUEST_DESC, KEY_QUEST_NAME,
};

/// Language codes with a shipped translation bundle.
pub const SUPPORTED_LANGS: &[&str] = &["en", "fr"];

/// Keys every bundle must provide.
pub(crate) const REQUIRED_KEYS: &[&str] = &[
    KEY_MENU_YES,
    KEY_MENU_NO,
    KEY_BOOK_TITLE,
    KEY_MSG_BOOK_PURCHASED,
    KEY_MSG_QUEST_GIVEN,
    KEY_MSG_QUEST_COMPLETED,
    KEY_MSG_REWARD_RECEIVED,
    KEY_QUEST_NAME,
    KEY_QUEST_DESC,
];

/// Errors raised while loading a localization bundle.
///
/// All of these indicate a packaging or build problem and should abort
/// startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocalizationError {
    #[error("unsupported language code \"{lang}\"")]
    UnsupportedLanguage { lang: String },
    #[error("bundle \"{lang}\" is not valid JSON: {message}")]
    InvalidBundle { lang: String, message: String },
    #[error("bundle \"{lang}\" is missing required key \"{key}\"")]
    MissingKey { lang: String, key: String },
}

fn bundle_source(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(include_str!("../i18n/en.json")),
        "fr" => Some(include_str!("../i18n/fr.json")),
        _ => None,
    }
}

/// A validated key-to-string table for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Localization {
    lang: String,
    table: Value,
}

impl Localization {
    /// Load and validate the shipped bundle for `lang`.
    ///
    /// # Errors
    ///
    /// Returns a [`LocalizationError`] when the code is not shipped, the
    /// bundle fails to parse, or a required key is absent.
    pub fn load(lang: &str) -> Result<Self, LocalizationError> {
        let source =
            bundle_source(lang).ok_or_else(|| LocalizationError::UnsupportedLanguage {
                lang: lang.to_string(),
            })?;
        let table =
            serde_json::from_str(source).map_err(|err| LocalizationError::InvalidBundle {
                lang: lang.to_string(),
                message: err.to_string(),
            })?;
        Self::from_table(lang, table)
    }

    /// Build a table from caller-supplied JSON, validating the required
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::MissingKey`] for the first required key
    /// that does not resolve to a string.
    pub fn from_table(lang: &str, table: Value) -> Result<Self, LocalizationError> {
        let loc = Self {
            lang: lang.to_string(),
            table,
        };
        for key in REQUIRED_KEYS {
            if loc.lookup(key).is_none() {
                return Err(LocalizationError::MissingKey {
                    lang: loc.lang,
                    key: (*key).to_string(),
                });
            }
        }
        Ok(loc)
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        let mut current = &self.table;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        current.as_str()
    }

    /// Resolve a key to its translated string.
    ///
    /// Required keys are verified at load time. An unknown key falls back
    /// to the key itself rather than panicking mid-session.
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}
