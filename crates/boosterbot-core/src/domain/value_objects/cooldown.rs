//! Cooldown kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four independent action cooldowns tracked per user.
///
/// Each cooldown is stored as a ready-at unix timestamp on the user
/// record; readiness checks against the wall clock belong to the
/// command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownKind {
    /// Opening a basic booster.
    BasicBooster,
    /// Opening a promo booster.
    PromoBooster,
    /// Grading a card.
    Grading,
    /// Claiming the daily reward.
    DailyClaim,
}

impl CooldownKind {
    /// Returns the kind's label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicBooster => "basic_booster",
            Self::PromoBooster => "promo_booster",
            Self::Grading => "grading",
            Self::DailyClaim => "daily_claim",
        }
    }

    /// Returns all cooldown kinds.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::BasicBooster,
            Self::PromoBooster,
            Self::Grading,
            Self::DailyClaim,
        ]
    }
}

impl fmt::Display for CooldownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
