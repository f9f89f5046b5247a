//! Grade-suffix parsing for card transfers.

use boosterbot_core::{CardGrade, CardId};
use boosterbot_localization::{grade_names, Localization};

/// Resolves user-typed `<card_id>-<grade name>` arguments.
///
/// The per-language grade tables are precomputed once at construction
/// from the localization catalogue, so parsing itself never touches the
/// collaborator.
pub struct GradeParser {
    grade_names_by_language: Vec<Vec<String>>,
}

impl GradeParser {
    /// Builds the parser from the localization catalogue.
    #[must_use]
    pub fn new(localization: &dyn Localization) -> Self {
        let grade_names_by_language = localization
            .supported_languages()
            .iter()
            .map(|language| grade_names(localization, *language))
            .collect();
        Self {
            grade_names_by_language,
        }
    }

    /// Splits a raw card argument into ID and grade.
    ///
    /// A grade suffix is only recognized when the input carries exactly
    /// two hyphens; the token after the last hyphen is lower-cased and
    /// matched against every supported language's grade names. Inputs
    /// without a recognizable suffix come back ungraded.
    #[must_use]
    pub fn parse(&self, raw: &str) -> (CardId, CardGrade) {
        if raw.matches('-').count() != 2 {
            return (CardId::new(raw), CardGrade::Ungraded);
        }
        let Some((card_id, token)) = raw.rsplit_once('-') else {
            return (CardId::new(raw), CardGrade::Ungraded);
        };
        let token = token.to_lowercase();
        let grade = self
            .grade_names_by_language
            .iter()
            .find_map(|names| names.iter().position(|name| name == &token))
            .and_then(CardGrade::from_index)
            .unwrap_or(CardGrade::Ungraded);
        (CardId::new(card_id), grade)
    }
}
