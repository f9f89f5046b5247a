//! Card grade and collection entry value objects.

use crate::CardId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality tier assigned to a card by the grading mini-game.
///
/// `Ungraded` is the state every drawn card starts in; the four graded
/// tiers go from `Poor` up to `Mint`. The order of [`CardGrade::all`]
/// matches the order of the localization catalogue keys, which is what
/// the grade-suffix parser relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardGrade {
    /// Card has never been graded.
    #[default]
    Ungraded,
    /// Lowest graded tier.
    Poor,
    /// Below-average condition.
    Average,
    /// Good condition.
    Good,
    /// Top tier.
    Mint,
}

impl CardGrade {
    /// Returns the canonical in-application label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ungraded => "ungraded",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Mint => "mint",
        }
    }

    /// Returns the localization catalogue key for this grade's display name.
    #[must_use]
    pub const fn catalog_key(&self) -> &'static str {
        match self {
            Self::Ungraded => "grade.not_graded",
            Self::Poor => "grade.0",
            Self::Average => "grade.1",
            Self::Good => "grade.2",
            Self::Mint => "grade.3",
        }
    }

    /// Returns all grades, ungraded first, in catalogue order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Ungraded, Self::Poor, Self::Average, Self::Good, Self::Mint]
    }

    /// Returns the grade at the given catalogue position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for CardGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a user's collection: a card ID plus its grade.
///
/// A collection is a multiset of entries; the same card may appear any
/// number of times, graded or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    /// Catalogue ID of the card.
    pub card_id: CardId,
    /// Grade of this particular copy.
    pub grade: CardGrade,
}

impl CardEntry {
    /// Creates a new collection entry.
    #[must_use]
    pub fn new(card_id: impl Into<CardId>, grade: CardGrade) -> Self {
        Self {
            card_id: card_id.into(),
            grade,
        }
    }

    /// Creates an ungraded entry, the state every drawn card starts in.
    #[must_use]
    pub fn ungraded(card_id: impl Into<CardId>) -> Self {
        Self::new(card_id, CardGrade::Ungraded)
    }
}
