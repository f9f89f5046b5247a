//! User entity.

use crate::{CardEntry, CooldownKind, Quest, QuestReward, UserId, UserSettings};
use serde::{Deserialize, Serialize};

/// A player record, created on first interaction and never deleted.
///
/// All timestamps are unix seconds; `0` means the action has never
/// happened. The collection is a multiset: the same card ID may appear
/// several times at different grades, or ungraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Platform user ID.
    pub id: UserId,

    /// Denormalized cache of the platform username, refreshed on every
    /// interaction.
    pub name_tag: String,

    /// Currency balance.
    pub money: i64,

    /// Unopened basic boosters.
    pub basic_boosters: u32,

    /// Unopened promo boosters.
    pub promo_boosters: u32,

    /// Grading credits.
    pub gradings: u32,

    /// Ready-at timestamp for the next basic booster.
    pub basic_booster_ready_at: i64,

    /// Ready-at timestamp for the next promo booster.
    pub promo_booster_ready_at: i64,

    /// Ready-at timestamp for the next grading.
    pub grading_ready_at: i64,

    /// Ready-at timestamp for the next daily claim.
    pub daily_claim_ready_at: i64,

    /// Soft-ban flag.
    pub banned: bool,

    /// Owned cards.
    pub collection: Vec<CardEntry>,

    /// The two active daily quests.
    pub daily_quests: Vec<Quest>,

    /// When the daily quest pair goes stale (next local midnight).
    pub next_daily_quests_refresh: i64,

    /// Last time this user touched the bot.
    pub last_interaction: i64,

    /// Embedded per-user settings.
    pub settings: UserSettings,
}

impl User {
    /// Creates a new user record with a fresh daily quest pair.
    #[must_use]
    pub fn new(
        id: UserId,
        name_tag: impl Into<String>,
        daily_quests: Vec<Quest>,
        next_daily_quests_refresh: i64,
        settings: UserSettings,
        now: i64,
    ) -> Self {
        Self {
            id,
            name_tag: name_tag.into(),
            money: 0,
            basic_boosters: 0,
            promo_boosters: 0,
            gradings: 0,
            basic_booster_ready_at: 0,
            promo_booster_ready_at: 0,
            grading_ready_at: 0,
            daily_claim_ready_at: 0,
            banned: false,
            collection: Vec::new(),
            daily_quests,
            next_daily_quests_refresh,
            last_interaction: now,
            settings,
        }
    }

    /// Records an interaction, refreshing the cached name tag.
    pub fn touch(&mut self, name_tag: impl Into<String>, now: i64) {
        self.name_tag = name_tag.into();
        self.last_interaction = now;
    }

    /// Number of cards in the collection, duplicates included.
    #[must_use]
    pub fn collection_size(&self) -> usize {
        self.collection.len()
    }

    /// Credits a quest reward onto this record.
    pub fn apply_quest_reward(&mut self, reward: QuestReward, amount: u32) {
        match reward {
            QuestReward::BasicBooster => self.basic_boosters += amount,
            QuestReward::PromoBooster => self.promo_boosters += amount,
            QuestReward::Money => self.money += i64::from(amount),
        }
    }

    /// Returns the ready-at timestamp of the given cooldown.
    #[must_use]
    pub const fn cooldown_ready_at(&self, kind: CooldownKind) -> i64 {
        match kind {
            CooldownKind::BasicBooster => self.basic_booster_ready_at,
            CooldownKind::PromoBooster => self.promo_booster_ready_at,
            CooldownKind::Grading => self.grading_ready_at,
            CooldownKind::DailyClaim => self.daily_claim_ready_at,
        }
    }

    /// Stores a new ready-at timestamp for the given cooldown.
    pub fn set_cooldown_ready_at(&mut self, kind: CooldownKind, ready_at: i64) {
        match kind {
            CooldownKind::BasicBooster => self.basic_booster_ready_at = ready_at,
            CooldownKind::PromoBooster => self.promo_booster_ready_at = ready_at,
            CooldownKind::Grading => self.grading_ready_at = ready_at,
            CooldownKind::DailyClaim => self.daily_claim_ready_at = ready_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardGrade, Language, QuestKind};

    fn create_user(id: u64) -> User {
        User::new(
            UserId::new(id),
            format!("player#{id}"),
            vec![
                Quest::new(QuestKind::Booster, 5, QuestReward::Money, 200),
                Quest::new(QuestKind::Grade, 3, QuestReward::BasicBooster, 2),
            ],
            1_700_000_000,
            UserSettings::new(Language::English),
            1_699_999_000,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = create_user(1);
        assert_eq!(user.money, 0);
        assert_eq!(user.basic_boosters, 0);
        assert_eq!(user.promo_boosters, 0);
        assert_eq!(user.gradings, 0);
        assert!(!user.banned);
        assert!(user.collection.is_empty());
        assert_eq!(user.daily_quests.len(), 2);
        assert_eq!(user.basic_booster_ready_at, 0);
        assert_eq!(user.daily_claim_ready_at, 0);
    }

    #[test]
    fn test_touch_refreshes_name_tag() {
        let mut user = create_user(1);
        user.touch("renamed#1", 1_700_000_500);
        assert_eq!(user.name_tag, "renamed#1");
        assert_eq!(user.last_interaction, 1_700_000_500);
    }

    #[test]
    fn test_apply_quest_reward() {
        let mut user = create_user(1);

        user.apply_quest_reward(QuestReward::BasicBooster, 3);
        assert_eq!(user.basic_boosters, 3);

        user.apply_quest_reward(QuestReward::PromoBooster, 1);
        assert_eq!(user.promo_boosters, 1);

        user.apply_quest_reward(QuestReward::Money, 400);
        assert_eq!(user.money, 400);
    }

    #[test]
    fn test_cooldown_accessors_cover_all_kinds() {
        let mut user = create_user(1);
        for (i, kind) in CooldownKind::all().iter().enumerate() {
            let ready_at = 1_700_000_000 + i as i64;
            user.set_cooldown_ready_at(*kind, ready_at);
            assert_eq!(user.cooldown_ready_at(*kind), ready_at);
        }
    }

    #[test]
    fn test_collection_size_counts_duplicates() {
        let mut user = create_user(1);
        user.collection.push(CardEntry::ungraded("base1-4"));
        user.collection.push(CardEntry::ungraded("base1-4"));
        user.collection.push(CardEntry::new("base1-4", CardGrade::Mint));
        assert_eq!(user.collection_size(), 3);
    }
}
