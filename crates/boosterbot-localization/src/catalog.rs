//! Embedded localized string catalogue.

use boosterbot_core::{CardGrade, Language};
use std::collections::HashMap;
use tracing::warn;

/// Localized string lookup.
///
/// Consumed by the service layer for grade-name resolution and by the
/// command layer for user-facing messages.
pub trait Localization: Send + Sync {
    /// Returns the string under `key` for `language`. Missing keys fall
    /// back to English, then to the key itself.
    fn get_string(&self, language: Language, key: &str) -> String;

    /// Returns every language the catalogue carries.
    fn supported_languages(&self) -> &[Language];
}

/// Catalogue backed by tables compiled into the binary.
pub struct StaticCatalog {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
    languages: Vec<Language>,
}

impl StaticCatalog {
    /// Builds the catalogue with every supported language.
    #[must_use]
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        for (language, entries) in [(Language::English, ENGLISH), (Language::French, FRENCH)] {
            let mut table = HashMap::new();
            for &(key, value) in entries {
                table.insert(key, value);
            }
            tables.insert(language, table);
        }
        Self {
            tables,
            languages: Language::all().to_vec(),
        }
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .copied()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Localization for StaticCatalog {
    fn get_string(&self, language: Language, key: &str) -> String {
        if let Some(value) = self.lookup(language, key) {
            return value.to_string();
        }
        if let Some(value) = self.lookup(Language::English, key) {
            return value.to_string();
        }
        warn!(key, %language, "missing localization key");
        key.to_string()
    }

    fn supported_languages(&self) -> &[Language] {
        &self.languages
    }
}

/// Lower-cased grade display names for one language, in catalogue order
/// (ungraded first). Index positions map back to [`CardGrade`] via
/// [`CardGrade::from_index`].
#[must_use]
pub fn grade_names(localization: &dyn Localization, language: Language) -> Vec<String> {
    CardGrade::all()
        .iter()
        .map(|grade| {
            localization
                .get_string(language, grade.catalog_key())
                .to_lowercase()
        })
        .collect()
}

const ENGLISH: &[(&str, &str)] = &[
    ("grade.not_graded", "Ungraded"),
    ("grade.0", "Poor"),
    ("grade.1", "Average"),
    ("grade.2", "Good"),
    ("grade.3", "Mint"),
    ("quest.kind.booster", "Open boosters"),
    ("quest.kind.grade", "Grade cards"),
    ("quest.kind.daily_claim", "Claim your daily reward"),
    ("quest.reward.basic_booster", "basic booster(s)"),
    ("quest.reward.promo_booster", "promo booster(s)"),
    ("quest.reward.money", "coins"),
    ("quest.accomplished_msg", "Quest accomplished!"),
];

const FRENCH: &[(&str, &str)] = &[
    ("grade.not_graded", "Non gradée"),
    ("grade.0", "Médiocre"),
    ("grade.1", "Moyenne"),
    ("grade.2", "Bonne"),
    ("grade.3", "Parfaite"),
    ("quest.kind.booster", "Ouvrir des boosters"),
    ("quest.kind.grade", "Faire grader des cartes"),
    ("quest.kind.daily_claim", "Récupérer la récompense du jour"),
    ("quest.reward.basic_booster", "booster(s) de base"),
    ("quest.reward.promo_booster", "booster(s) promo"),
    ("quest.reward.money", "pièces"),
    ("quest.accomplished_msg", "Quête accomplie !"),
];
