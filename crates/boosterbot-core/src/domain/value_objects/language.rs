//! Supported languages and platform-locale mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the bot can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// French.
    French,
}

impl Language {
    /// Returns the language's short code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::English, Self::French]
    }

    /// Maps a platform locale identifier (`"en-US"`, `"fr"`, …) to a
    /// supported language. Unknown locales fall back to English.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or(locale)
            .to_lowercase();
        match primary.as_str() {
            "fr" => Self::French,
            _ => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
