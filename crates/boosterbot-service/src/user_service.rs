//! User service: the facade command handlers call into.

use crate::cooldown::{next_local_midnight, CooldownPolicy};
use crate::grade_parser::GradeParser;
use crate::quest_engine;
use async_trait::async_trait;
use boosterbot_config::AppConfig;
use boosterbot_core::{
    BotResult, BoosterKind, CardEntry, CardGrade, CardId, CooldownKind, Quest, QuestKind, User,
    UserId, UserSettings,
};
use boosterbot_localization::Localization;
use boosterbot_repository::UserRepository;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, info};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns a user without touching the record.
    async fn get_user(&self, id: UserId) -> BotResult<Option<User>>;

    /// Returns the user for an incoming interaction, creating the
    /// record on first contact or refreshing name tag, last-seen
    /// timestamp, and stale daily quests on an existing one.
    async fn get_or_register_user(
        &self,
        id: UserId,
        name_tag: &str,
        locale: &str,
    ) -> BotResult<User>;

    /// Adjusts a user's money balance.
    async fn give_money(&self, id: UserId, amount: i64) -> BotResult<bool>;

    /// Adjusts every user's money balance.
    async fn give_all_money(&self, amount: i64) -> BotResult<bool>;

    /// Adjusts a user's booster count of the given kind.
    async fn give_boosters(&self, id: UserId, kind: BoosterKind, quantity: i64) -> BotResult<bool>;

    /// Adjusts every user's booster count of the given kind.
    async fn give_all_boosters(&self, kind: BoosterKind, quantity: i64) -> BotResult<bool>;

    /// Adjusts a user's grading-credit count.
    async fn give_gradings(&self, id: UserId, quantity: i64) -> BotResult<bool>;

    /// Spends one booster of the given kind.
    async fn consume_booster(&self, id: UserId, kind: BoosterKind) -> BotResult<bool>;

    /// Spends one grading credit.
    async fn consume_grading(&self, id: UserId) -> BotResult<bool>;

    /// Restarts a cooldown: fixed duration for boosters and grading,
    /// next local midnight for the daily claim.
    async fn reset_cooldown(&self, id: UserId, kind: CooldownKind) -> BotResult<bool>;

    /// Adds freshly drawn cards to a collection, ungraded.
    async fn add_cards_to_collection(&self, id: UserId, card_ids: Vec<CardId>) -> BotResult<bool>;

    /// Removes a single entry from a collection.
    async fn remove_card_from_collection(&self, id: UserId, card: CardEntry) -> BotResult<bool>;

    /// Moves cards between collections. Inputs may carry a localized
    /// grade suffix (`<card_id>-<grade name>`).
    async fn transfer_cards(
        &self,
        sender: UserId,
        receiver: UserId,
        raw_card_ids: Vec<String>,
    ) -> BotResult<bool>;

    /// Moves money between users. Fails closed when the sender's
    /// balance is insufficient.
    async fn transfer_money(&self, sender: UserId, receiver: UserId, amount: i64)
        -> BotResult<bool>;

    /// Replaces one ungraded copy of a card with a graded one.
    async fn grade_user_card(
        &self,
        id: UserId,
        card_id: CardId,
        grade: CardGrade,
    ) -> BotResult<bool>;

    /// Returns the collection leaderboard, largest collection first.
    async fn get_top_users_by_collection(&self) -> BotResult<Vec<User>>;

    /// Number of registered users.
    async fn count_users(&self) -> BotResult<usize>;

    /// Sum of every user's balance.
    async fn total_money_in_circulation(&self) -> BotResult<i64>;

    /// Sets the soft-ban flag.
    async fn ban_user(&self, id: UserId) -> BotResult<bool>;

    /// Clears the soft-ban flag.
    async fn unban_user(&self, id: UserId) -> BotResult<bool>;

    /// Counts one action against the user's matching daily quests and
    /// pays out any quest that just reached its goal. Returns the newly
    /// accomplished quests.
    async fn update_quest_progress(&self, id: UserId, action: QuestKind) -> BotResult<Vec<Quest>>;
}

/// Generic user service implementation.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
    grade_parser: GradeParser,
    cooldowns: CooldownPolicy,
    leaderboard_size: usize,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(
        user_repository: Arc<R>,
        localization: Arc<dyn Localization>,
        config: &AppConfig,
    ) -> Self {
        Self {
            user_repository,
            grade_parser: GradeParser::new(localization.as_ref()),
            cooldowns: CooldownPolicy::new(&config.cooldowns),
            leaderboard_size: config.game.leaderboard_size,
        }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn get_user(&self, id: UserId) -> BotResult<Option<User>> {
        self.user_repository.find_by_id(id).await
    }

    async fn get_or_register_user(
        &self,
        id: UserId,
        name_tag: &str,
        locale: &str,
    ) -> BotResult<User> {
        let now = Local::now();

        match self.user_repository.find_by_id(id).await? {
            None => {
                let user = User::new(
                    id,
                    name_tag,
                    quest_engine::generate_daily_pair().to_vec(),
                    next_local_midnight(now),
                    UserSettings::from_locale(locale),
                    now.timestamp(),
                );
                self.user_repository.save(&user).await?;
                info!(user_id = %id, "registered new user");
                Ok(user)
            }
            Some(mut user) => {
                user.touch(name_tag, now.timestamp());
                if now.timestamp() >= user.next_daily_quests_refresh {
                    user.daily_quests = quest_engine::generate_daily_pair().to_vec();
                    user.next_daily_quests_refresh = next_local_midnight(now);
                    debug!(user_id = %id, "daily quests rolled over");
                }
                self.user_repository.save(&user).await?;
                Ok(user)
            }
        }
    }

    async fn give_money(&self, id: UserId, amount: i64) -> BotResult<bool> {
        debug!(user_id = %id, amount, "adjusting money");
        self.user_repository.change_money(id, amount).await
    }

    async fn give_all_money(&self, amount: i64) -> BotResult<bool> {
        info!(amount, "adjusting money for all users");
        self.user_repository.change_all_money(amount).await
    }

    async fn give_boosters(&self, id: UserId, kind: BoosterKind, quantity: i64) -> BotResult<bool> {
        debug!(user_id = %id, %kind, quantity, "adjusting boosters");
        self.user_repository
            .change_booster_quantity(id, kind, quantity)
            .await
    }

    async fn give_all_boosters(&self, kind: BoosterKind, quantity: i64) -> BotResult<bool> {
        info!(%kind, quantity, "adjusting boosters for all users");
        self.user_repository
            .change_all_booster_quantity(kind, quantity)
            .await
    }

    async fn give_gradings(&self, id: UserId, quantity: i64) -> BotResult<bool> {
        debug!(user_id = %id, quantity, "adjusting gradings");
        self.user_repository.change_grading_quantity(id, quantity).await
    }

    async fn consume_booster(&self, id: UserId, kind: BoosterKind) -> BotResult<bool> {
        self.user_repository
            .change_booster_quantity(id, kind, -1)
            .await
    }

    async fn consume_grading(&self, id: UserId) -> BotResult<bool> {
        self.user_repository.change_grading_quantity(id, -1).await
    }

    async fn reset_cooldown(&self, id: UserId, kind: CooldownKind) -> BotResult<bool> {
        let ready_at = self.cooldowns.ready_at(kind, Local::now());
        debug!(user_id = %id, %kind, ready_at, "resetting cooldown");
        self.user_repository.set_cooldown(id, kind, ready_at).await
    }

    async fn add_cards_to_collection(&self, id: UserId, card_ids: Vec<CardId>) -> BotResult<bool> {
        let entries: Vec<CardEntry> = card_ids.into_iter().map(CardEntry::ungraded).collect();
        self.user_repository
            .add_cards_to_collection(id, &entries)
            .await
    }

    async fn remove_card_from_collection(&self, id: UserId, card: CardEntry) -> BotResult<bool> {
        self.user_repository
            .remove_cards_from_collection(id, std::slice::from_ref(&card))
            .await
    }

    async fn transfer_cards(
        &self,
        sender: UserId,
        receiver: UserId,
        raw_card_ids: Vec<String>,
    ) -> BotResult<bool> {
        let entries: Vec<CardEntry> = raw_card_ids
            .iter()
            .map(|raw| {
                let (card_id, grade) = self.grade_parser.parse(raw);
                CardEntry::new(card_id, grade)
            })
            .collect();

        // The receiver is checked up front so a successful removal is
        // never followed by an add against a missing record.
        if self.user_repository.find_by_id(receiver).await?.is_none() {
            return Ok(false);
        }
        if !self
            .user_repository
            .remove_cards_from_collection(sender, &entries)
            .await?
        {
            return Ok(false);
        }
        self.user_repository
            .add_cards_to_collection(receiver, &entries)
            .await?;
        info!(sender = %sender, receiver = %receiver, count = entries.len(), "transferred cards");
        Ok(true)
    }

    async fn transfer_money(
        &self,
        sender: UserId,
        receiver: UserId,
        amount: i64,
    ) -> BotResult<bool> {
        if amount <= 0 {
            return Ok(false);
        }
        let Some(sender_record) = self.user_repository.find_by_id(sender).await? else {
            return Ok(false);
        };
        if sender_record.money < amount {
            debug!(sender = %sender, amount, balance = sender_record.money, "insufficient balance");
            return Ok(false);
        }
        if self.user_repository.find_by_id(receiver).await?.is_none() {
            return Ok(false);
        }

        self.user_repository.change_money(sender, -amount).await?;
        self.user_repository.change_money(receiver, amount).await?;
        info!(sender = %sender, receiver = %receiver, amount, "transferred money");
        Ok(true)
    }

    async fn grade_user_card(
        &self,
        id: UserId,
        card_id: CardId,
        grade: CardGrade,
    ) -> BotResult<bool> {
        let ungraded = CardEntry::ungraded(card_id.clone());
        if !self
            .user_repository
            .remove_cards_from_collection(id, std::slice::from_ref(&ungraded))
            .await?
        {
            return Ok(false);
        }
        self.user_repository
            .add_cards_to_collection(id, &[CardEntry::new(card_id, grade)])
            .await?;
        Ok(true)
    }

    async fn get_top_users_by_collection(&self) -> BotResult<Vec<User>> {
        self.user_repository
            .find_top_by_collection_size(self.leaderboard_size)
            .await
    }

    async fn count_users(&self) -> BotResult<usize> {
        Ok(self.user_repository.find_all().await?.len())
    }

    async fn total_money_in_circulation(&self) -> BotResult<i64> {
        Ok(self
            .user_repository
            .find_all()
            .await?
            .iter()
            .map(|user| user.money)
            .sum())
    }

    async fn ban_user(&self, id: UserId) -> BotResult<bool> {
        info!(user_id = %id, "banning user");
        self.user_repository.set_ban(id, true).await
    }

    async fn unban_user(&self, id: UserId) -> BotResult<bool> {
        info!(user_id = %id, "unbanning user");
        self.user_repository.set_ban(id, false).await
    }

    async fn update_quest_progress(&self, id: UserId, action: QuestKind) -> BotResult<Vec<Quest>> {
        let Some(mut user) = self.user_repository.find_by_id(id).await? else {
            return Ok(Vec::new());
        };

        let mut accomplished = Vec::new();
        let mut rewards = Vec::new();
        for quest in &mut user.daily_quests {
            if quest.kind == action && !quest.accomplished() {
                quest.increase_progress();
                if quest.accomplished() {
                    rewards.push((quest.reward_kind, quest.reward_amount));
                    accomplished.push(quest.clone());
                }
            }
        }
        for (reward_kind, amount) in rewards {
            user.apply_quest_reward(reward_kind, amount);
            info!(user_id = %id, reward = %reward_kind, amount, "quest accomplished");
        }

        self.user_repository.save(&user).await?;
        Ok(accomplished)
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boosterbot_core::{Language, QuestReward};
    use boosterbot_localization::StaticCatalog;
    use boosterbot_repository::InMemoryUserRepository;

    fn create_service(
        repo: Arc<InMemoryUserRepository>,
    ) -> UserServiceImpl<InMemoryUserRepository> {
        UserServiceImpl::new(repo, Arc::new(StaticCatalog::new()), &AppConfig::default())
    }

    async fn register(
        service: &UserServiceImpl<InMemoryUserRepository>,
        id: u64,
    ) -> User {
        service
            .get_or_register_user(UserId::new(id), &format!("player#{id}"), "en-US")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_creates_user_with_fresh_quests() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        let now = Local::now().timestamp();

        let user = service
            .get_or_register_user(UserId::new(1), "player#1", "fr-FR")
            .await
            .unwrap();

        assert_eq!(user.name_tag, "player#1");
        assert_eq!(user.settings.language, Language::French);
        assert_eq!(user.daily_quests.len(), 2);
        assert_ne!(user.daily_quests[0].kind, user.daily_quests[1].kind);
        assert!(user.next_daily_quests_refresh > now);
        assert_eq!(user.money, 0);
        assert!(!user.banned);
    }

    #[tokio::test]
    async fn test_register_existing_user_refreshes_without_recreating() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        register(&service, 1).await;
        assert!(service.give_money(UserId::new(1), 500).await.unwrap());

        let user = service
            .get_or_register_user(UserId::new(1), "renamed#1", "en-US")
            .await
            .unwrap();

        assert_eq!(user.name_tag, "renamed#1");
        assert_eq!(user.money, 500);
        assert_eq!(service.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stale_quests_roll_over_on_interaction() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        let mut user = register(&service, 1).await;
        user.next_daily_quests_refresh = 1;
        for quest in &mut user.daily_quests {
            quest.progress = quest.goal;
        }
        repo.save(&user).await.unwrap();

        let now = Local::now().timestamp();
        let refreshed = service
            .get_or_register_user(UserId::new(1), "player#1", "en-US")
            .await
            .unwrap();

        assert_eq!(refreshed.daily_quests.len(), 2);
        assert_ne!(refreshed.daily_quests[0].kind, refreshed.daily_quests[1].kind);
        for quest in &refreshed.daily_quests {
            assert_eq!(quest.progress, 0);
        }
        assert!(refreshed.next_daily_quests_refresh > now);
    }

    #[tokio::test]
    async fn test_fresh_quests_are_kept_on_interaction() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        let mut user = register(&service, 1).await;
        user.daily_quests = vec![
            Quest::new(QuestKind::Booster, 4, QuestReward::Money, 300),
            Quest::new(QuestKind::Grade, 2, QuestReward::PromoBooster, 1),
        ];
        repo.save(&user).await.unwrap();

        let kept = service
            .get_or_register_user(UserId::new(1), "player#1", "en-US")
            .await
            .unwrap();
        assert_eq!(kept.daily_quests, user.daily_quests);
    }

    #[tokio::test]
    async fn test_update_quest_progress_pays_out_once() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        let mut user = register(&service, 1).await;
        user.daily_quests = vec![
            Quest::new(QuestKind::Booster, 1, QuestReward::Money, 300),
            Quest::new(QuestKind::Grade, 99, QuestReward::BasicBooster, 2),
        ];
        repo.save(&user).await.unwrap();

        let accomplished = service
            .update_quest_progress(UserId::new(1), QuestKind::Booster)
            .await
            .unwrap();
        assert_eq!(accomplished.len(), 1);
        assert_eq!(accomplished[0].kind, QuestKind::Booster);

        let user = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(user.money, 300);

        // Repeating the action must not re-grant the reward.
        let again = service
            .update_quest_progress(UserId::new(1), QuestKind::Booster)
            .await
            .unwrap();
        assert!(again.is_empty());
        let user = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(user.money, 300);
        assert_eq!(user.daily_quests[0].progress, 1);
    }

    #[tokio::test]
    async fn test_update_quest_progress_only_counts_matching_kind() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        let mut user = register(&service, 1).await;
        user.daily_quests = vec![
            Quest::new(QuestKind::Booster, 3, QuestReward::Money, 100),
            Quest::new(QuestKind::DailyClaim, 1, QuestReward::PromoBooster, 2),
        ];
        repo.save(&user).await.unwrap();

        let accomplished = service
            .update_quest_progress(UserId::new(1), QuestKind::DailyClaim)
            .await
            .unwrap();
        assert_eq!(accomplished.len(), 1);

        let user = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(user.daily_quests[0].progress, 0);
        assert_eq!(user.promo_boosters, 2);
    }

    #[tokio::test]
    async fn test_update_quest_progress_unknown_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(repo);

        let accomplished = service
            .update_quest_progress(UserId::new(404), QuestKind::Booster)
            .await
            .unwrap();
        assert!(accomplished.is_empty());
    }

    #[tokio::test]
    async fn test_transfer_money_insufficient_balance_changes_nothing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        service.give_money(UserId::new(1), 100).await.unwrap();

        let ok = service
            .transfer_money(UserId::new(1), UserId::new(2), 500)
            .await
            .unwrap();
        assert!(!ok);

        let sender = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        let receiver = service.get_user(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(sender.money, 100);
        assert_eq!(receiver.money, 0);
    }

    #[tokio::test]
    async fn test_transfer_money_moves_balance() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        service.give_money(UserId::new(1), 400).await.unwrap();

        let ok = service
            .transfer_money(UserId::new(1), UserId::new(2), 150)
            .await
            .unwrap();
        assert!(ok);

        let sender = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        let receiver = service.get_user(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(sender.money, 250);
        assert_eq!(receiver.money, 150);
    }

    #[tokio::test]
    async fn test_transfer_money_to_unknown_receiver_fails_closed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        service.give_money(UserId::new(1), 400).await.unwrap();

        let ok = service
            .transfer_money(UserId::new(1), UserId::new(404), 100)
            .await
            .unwrap();
        assert!(!ok);

        let sender = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(sender.money, 400);
    }

    #[tokio::test]
    async fn test_transfer_cards_with_grade_suffix() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        repo.add_cards_to_collection(
            UserId::new(1),
            &[CardEntry::new("base1-4", CardGrade::Mint)],
        )
        .await
        .unwrap();

        let ok = service
            .transfer_cards(
                UserId::new(1),
                UserId::new(2),
                vec!["base1-4-mint".to_string()],
            )
            .await
            .unwrap();
        assert!(ok);

        let sender = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        let receiver = service.get_user(UserId::new(2)).await.unwrap().unwrap();
        assert!(sender.collection.is_empty());
        assert_eq!(
            receiver.collection,
            vec![CardEntry::new("base1-4", CardGrade::Mint)]
        );
    }

    #[tokio::test]
    async fn test_transfer_cards_without_suffix_moves_ungraded() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        repo.add_cards_to_collection(UserId::new(1), &[CardEntry::ungraded("base1-4")])
            .await
            .unwrap();

        let ok = service
            .transfer_cards(UserId::new(1), UserId::new(2), vec!["base1-4".to_string()])
            .await
            .unwrap();
        assert!(ok);

        let receiver = service.get_user(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(receiver.collection, vec![CardEntry::ungraded("base1-4")]);
    }

    #[tokio::test]
    async fn test_transfer_cards_failed_removal_leaves_receiver_unchanged() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        repo.add_cards_to_collection(UserId::new(2), &[CardEntry::ungraded("base1-9")])
            .await
            .unwrap();

        // Sender owns nothing; the removal fails and nothing moves.
        let ok = service
            .transfer_cards(UserId::new(1), UserId::new(2), vec!["base1-4".to_string()])
            .await
            .unwrap();
        assert!(!ok);

        let receiver = service.get_user(UserId::new(2)).await.unwrap().unwrap();
        assert_eq!(receiver.collection, vec![CardEntry::ungraded("base1-9")]);
    }

    #[tokio::test]
    async fn test_grade_user_card() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        repo.add_cards_to_collection(UserId::new(1), &[CardEntry::ungraded("base1-4")])
            .await
            .unwrap();

        let ok = service
            .grade_user_card(UserId::new(1), CardId::new("base1-4"), CardGrade::Good)
            .await
            .unwrap();
        assert!(ok);

        let user = service.get_user(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(
            user.collection,
            vec![CardEntry::new("base1-4", CardGrade::Good)]
        );

        // No ungraded copy is left, so grading again fails.
        let again = service
            .grade_user_card(UserId::new(1), CardId::new("base1-4"), CardGrade::Mint)
            .await
            .unwrap();
        assert!(!again);
    }

    #[tokio::test]
    async fn test_leaderboard_is_limited_and_ordered() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));

        for id in 1..=60 {
            register(&service, id).await;
            let cards: Vec<CardId> = (0..id).map(|i| CardId::new(format!("c-{i}"))).collect();
            service
                .add_cards_to_collection(UserId::new(id), cards)
                .await
                .unwrap();
        }

        let top = service.get_top_users_by_collection().await.unwrap();
        assert_eq!(top.len(), 50);
        assert_eq!(top[0].id, UserId::new(60));
        for pair in top.windows(2) {
            assert!(pair[0].collection_size() >= pair[1].collection_size());
        }
    }

    #[tokio::test]
    async fn test_aggregate_statistics() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;
        service.give_money(UserId::new(1), 300).await.unwrap();
        service.give_money(UserId::new(2), 200).await.unwrap();

        assert_eq!(service.count_users().await.unwrap(), 2);
        assert_eq!(service.total_money_in_circulation().await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_ban_and_unban() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;

        assert!(service.ban_user(UserId::new(1)).await.unwrap());
        assert!(service.get_user(UserId::new(1)).await.unwrap().unwrap().banned);

        assert!(service.unban_user(UserId::new(1)).await.unwrap());
        assert!(!service.get_user(UserId::new(1)).await.unwrap().unwrap().banned);

        assert!(!service.ban_user(UserId::new(404)).await.unwrap());
    }

    #[tokio::test]
    async fn test_boosters_and_gradings_lifecycle() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        let id = UserId::new(1);

        assert!(service.give_boosters(id, BoosterKind::Basic, 2).await.unwrap());
        assert!(service.give_gradings(id, 1).await.unwrap());

        assert!(service.consume_booster(id, BoosterKind::Basic).await.unwrap());
        assert!(service.consume_grading(id).await.unwrap());
        // Nothing left to spend.
        assert!(!service.consume_grading(id).await.unwrap());

        let user = service.get_user(id).await.unwrap().unwrap();
        assert_eq!(user.basic_boosters, 1);
        assert_eq!(user.promo_boosters, 0);
        assert_eq!(user.gradings, 0);
    }

    #[tokio::test]
    async fn test_give_all_boosters() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        register(&service, 2).await;

        assert!(service
            .give_all_boosters(BoosterKind::Promo, 3)
            .await
            .unwrap());

        for user in repo.find_all().await.unwrap() {
            assert_eq!(user.promo_boosters, 3);
        }
    }

    #[tokio::test]
    async fn test_reset_cooldowns() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        let id = UserId::new(1);
        let config = AppConfig::default();
        let now = Local::now().timestamp();

        assert!(service
            .reset_cooldown(id, CooldownKind::BasicBooster)
            .await
            .unwrap());
        assert!(service
            .reset_cooldown(id, CooldownKind::DailyClaim)
            .await
            .unwrap());

        let user = service.get_user(id).await.unwrap().unwrap();

        let expected = now + i64::try_from(config.cooldowns.basic_booster_secs).unwrap();
        assert!((user.basic_booster_ready_at - expected).abs() <= 2);

        // The daily claim lands on the next midnight, within a day.
        assert!(user.daily_claim_ready_at > now);
        assert!(user.daily_claim_ready_at <= now + 24 * 60 * 60 + 3_600);
        assert_eq!(user.promo_booster_ready_at, 0);
    }

    #[tokio::test]
    async fn test_remove_card_from_collection() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = create_service(Arc::clone(&repo));
        register(&service, 1).await;
        let id = UserId::new(1);

        service
            .add_cards_to_collection(id, vec![CardId::new("base1-4")])
            .await
            .unwrap();

        assert!(service
            .remove_card_from_collection(id, CardEntry::ungraded("base1-4"))
            .await
            .unwrap());
        assert!(!service
            .remove_card_from_collection(id, CardEntry::ungraded("base1-4"))
            .await
            .unwrap());
    }
}
