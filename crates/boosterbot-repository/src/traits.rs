//! Repository trait definitions.

use async_trait::async_trait;
use boosterbot_core::{BotResult, BoosterKind, CardEntry, CooldownKind, User, UserId};

/// User repository trait.
///
/// Field-scoped mutators return `Ok(false)` when the user does not
/// exist or a constraint blocks the change (e.g. removing more cards
/// than the collection holds); `Err` is reserved for storage faults.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> BotResult<Option<User>>;

    /// Saves a user record, inserting or replacing it wholesale.
    async fn save(&self, user: &User) -> BotResult<()>;

    /// Returns every user record.
    async fn find_all(&self) -> BotResult<Vec<User>>;

    /// Returns the `limit` users with the largest collections, largest
    /// first.
    async fn find_top_by_collection_size(&self, limit: usize) -> BotResult<Vec<User>>;

    /// Adjusts a user's money balance by `delta`.
    async fn change_money(&self, id: UserId, delta: i64) -> BotResult<bool>;

    /// Adjusts every user's money balance by `delta`.
    async fn change_all_money(&self, delta: i64) -> BotResult<bool>;

    /// Adjusts a user's booster count of the given kind by `delta`.
    /// Fails if the count would go negative.
    async fn change_booster_quantity(
        &self,
        id: UserId,
        kind: BoosterKind,
        delta: i64,
    ) -> BotResult<bool>;

    /// Adjusts every user's booster count of the given kind by `delta`,
    /// clamping at zero.
    async fn change_all_booster_quantity(&self, kind: BoosterKind, delta: i64) -> BotResult<bool>;

    /// Adjusts a user's grading-credit count by `delta`. Fails if the
    /// count would go negative.
    async fn change_grading_quantity(&self, id: UserId, delta: i64) -> BotResult<bool>;

    /// Stores a new ready-at timestamp for one of the user's cooldowns.
    async fn set_cooldown(&self, id: UserId, kind: CooldownKind, ready_at: i64) -> BotResult<bool>;

    /// Appends entries to the user's collection.
    async fn add_cards_to_collection(&self, id: UserId, cards: &[CardEntry]) -> BotResult<bool>;

    /// Removes exactly one matching entry per requested pair. All or
    /// nothing: if any pair is not present in the required multiplicity
    /// the collection is left untouched and `false` is returned.
    async fn remove_cards_from_collection(
        &self,
        id: UserId,
        cards: &[CardEntry],
    ) -> BotResult<bool>;

    /// Sets or clears the soft-ban flag.
    async fn set_ban(&self, id: UserId, banned: bool) -> BotResult<bool>;
}
