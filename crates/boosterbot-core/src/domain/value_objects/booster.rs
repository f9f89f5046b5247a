//! Booster pack kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of booster pack a user can hold and open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoosterKind {
    /// Standard booster pack.
    Basic,
    /// Promotional booster pack.
    Promo,
}

impl BoosterKind {
    /// Returns the kind's label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Promo => "promo",
        }
    }

    /// Parses a kind from a command-argument string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "promo" | "promotional" => Some(Self::Promo),
            _ => None,
        }
    }
}

impl fmt::Display for BoosterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
