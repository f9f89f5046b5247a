//! Daily quest generation.

use boosterbot_core::{Quest, QuestKind, QuestReward};
use rand::{thread_rng, Rng};

/// Generates the daily quest pair.
///
/// The two kinds are drawn without replacement, so the pair is always
/// distinct; reward kinds are drawn independently and may repeat. Pure
/// generation, no persistence.
#[must_use]
pub fn generate_daily_pair() -> [Quest; 2] {
    let mut rng = thread_rng();
    let mut kinds = QuestKind::all().to_vec();
    let first = kinds.swap_remove(rng.gen_range(0..kinds.len()));
    let second = kinds.swap_remove(rng.gen_range(0..kinds.len()));
    [
        generate_quest(first, &mut rng),
        generate_quest(second, &mut rng),
    ]
}

fn generate_quest(kind: QuestKind, rng: &mut impl Rng) -> Quest {
    let goal = match kind {
        QuestKind::Booster => rng.gen_range(3..=8),
        QuestKind::Grade => rng.gen_range(2..=6),
        QuestKind::DailyClaim => 1,
    };

    let rewards = QuestReward::all();
    let reward_kind = rewards[rng.gen_range(0..rewards.len())];
    let reward_amount = match reward_kind {
        QuestReward::BasicBooster => rng.gen_range(2..=4),
        QuestReward::PromoBooster => rng.gen_range(1..=2),
        QuestReward::Money => rng.gen_range(1..=4u32) * 100,
    };

    Quest::new(kind, goal, reward_kind, reward_amount)
}
