//! Per-user settings embedded in the user record.

use crate::Language;
use serde::{Deserialize, Serialize};

/// Settings a user can change, stored inline on the user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserSettings {
    /// Preferred answer language.
    pub language: Language,
}

impl UserSettings {
    /// Creates settings with the given language.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Derives default settings from a platform locale identifier.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        Self::new(Language::from_locale(locale))
    }
}
