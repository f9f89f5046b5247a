//! In-memory user store.

use crate::UserRepository;
use async_trait::async_trait;
use boosterbot_core::{BotResult, BoosterKind, CardEntry, CooldownKind, User, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Single-process user store over a guarded hash map.
///
/// Each call takes the lock once, so individual operations are atomic;
/// cross-record sequences (transfers) are serialized only per call, not
/// per command.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.users.write();
            for user in users {
                map.insert(user.id, user);
            }
        }
        repo
    }

    fn checked_count(current: u32, delta: i64) -> Option<u32> {
        i64::from(current)
            .checked_add(delta)
            .and_then(|value| u32::try_from(value).ok())
    }

    fn saturated_count(current: u32, delta: i64) -> u32 {
        let value = i64::from(current).saturating_add(delta);
        u32::try_from(value.clamp(0, i64::from(u32::MAX))).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> BotResult<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn save(&self, user: &User) -> BotResult<()> {
        debug!(user_id = %user.id, "saving user record");
        self.users.write().insert(user.id, user.clone());
        Ok(())
    }

    async fn find_all(&self) -> BotResult<Vec<User>> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn find_top_by_collection_size(&self, limit: usize) -> BotResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().values().cloned().collect();
        users.sort_by(|a, b| {
            b.collection_size()
                .cmp(&a.collection_size())
                .then_with(|| a.id.cmp(&b.id))
        });
        users.truncate(limit);
        Ok(users)
    }

    async fn change_money(&self, id: UserId, delta: i64) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        user.money += delta;
        Ok(true)
    }

    async fn change_all_money(&self, delta: i64) -> BotResult<bool> {
        let mut users = self.users.write();
        for user in users.values_mut() {
            user.money += delta;
        }
        Ok(true)
    }

    async fn change_booster_quantity(
        &self,
        id: UserId,
        kind: BoosterKind,
        delta: i64,
    ) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        let current = match kind {
            BoosterKind::Basic => user.basic_boosters,
            BoosterKind::Promo => user.promo_boosters,
        };
        let Some(value) = Self::checked_count(current, delta) else {
            return Ok(false);
        };
        match kind {
            BoosterKind::Basic => user.basic_boosters = value,
            BoosterKind::Promo => user.promo_boosters = value,
        }
        Ok(true)
    }

    async fn change_all_booster_quantity(&self, kind: BoosterKind, delta: i64) -> BotResult<bool> {
        let mut users = self.users.write();
        for user in users.values_mut() {
            match kind {
                BoosterKind::Basic => {
                    user.basic_boosters = Self::saturated_count(user.basic_boosters, delta);
                }
                BoosterKind::Promo => {
                    user.promo_boosters = Self::saturated_count(user.promo_boosters, delta);
                }
            }
        }
        Ok(true)
    }

    async fn change_grading_quantity(&self, id: UserId, delta: i64) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        let Some(value) = Self::checked_count(user.gradings, delta) else {
            return Ok(false);
        };
        user.gradings = value;
        Ok(true)
    }

    async fn set_cooldown(&self, id: UserId, kind: CooldownKind, ready_at: i64) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        user.set_cooldown_ready_at(kind, ready_at);
        Ok(true)
    }

    async fn add_cards_to_collection(&self, id: UserId, cards: &[CardEntry]) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        user.collection.extend_from_slice(cards);
        Ok(true)
    }

    async fn remove_cards_from_collection(
        &self,
        id: UserId,
        cards: &[CardEntry],
    ) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        // Work on a copy so a missing entry leaves the collection untouched.
        let mut remaining = user.collection.clone();
        for entry in cards {
            match remaining.iter().position(|e| e == entry) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => return Ok(false),
            }
        }
        user.collection = remaining;
        Ok(true)
    }

    async fn set_ban(&self, id: UserId, banned: bool) -> BotResult<bool> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        user.banned = banned;
        Ok(true)
    }
}
