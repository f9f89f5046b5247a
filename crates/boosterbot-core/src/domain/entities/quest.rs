//! Daily quest entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The action a quest asks the user to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    /// Open booster packs.
    Booster,
    /// Grade cards.
    Grade,
    /// Claim the daily reward.
    DailyClaim,
}

impl QuestKind {
    /// Returns the kind's label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booster => "booster",
            Self::Grade => "grade",
            Self::DailyClaim => "daily_claim",
        }
    }

    /// Returns all quest kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Booster, Self::Grade, Self::DailyClaim]
    }
}

impl fmt::Display for QuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a completed quest pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestReward {
    /// Basic booster packs.
    BasicBooster,
    /// Promo booster packs.
    PromoBooster,
    /// In-game currency.
    Money,
}

impl QuestReward {
    /// Returns the reward's label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicBooster => "basic_booster",
            Self::PromoBooster => "promo_booster",
            Self::Money => "money",
        }
    }

    /// Returns all reward kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::BasicBooster, Self::PromoBooster, Self::Money]
    }
}

impl fmt::Display for QuestReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A daily task with a goal and a reward, tracked per user.
///
/// Two quests are generated at each midnight rollover and replaced
/// wholesale at the next one; unclaimed progress is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Action being counted.
    pub kind: QuestKind,
    /// Number of actions required.
    pub goal: u32,
    /// Actions performed so far.
    pub progress: u32,
    /// What completing the quest pays out.
    pub reward_kind: QuestReward,
    /// How much of the reward is paid out.
    pub reward_amount: u32,
}

impl Quest {
    /// Creates a new quest with zero progress.
    #[must_use]
    pub const fn new(
        kind: QuestKind,
        goal: u32,
        reward_kind: QuestReward,
        reward_amount: u32,
    ) -> Self {
        Self {
            kind,
            goal,
            progress: 0,
            reward_kind,
            reward_amount,
        }
    }

    /// Whether the goal has been reached.
    #[must_use]
    pub const fn accomplished(&self) -> bool {
        self.progress >= self.goal
    }

    /// Counts one matching action. Accomplished quests stop accumulating.
    pub fn increase_progress(&mut self) {
        if !self.accomplished() {
            self.progress += 1;
        }
    }
}
