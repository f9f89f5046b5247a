//! Cooldown timestamp computation.

use boosterbot_config::CooldownConfig;
use boosterbot_core::CooldownKind;
use chrono::{DateTime, Days, Local, TimeZone};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Computes ready-at timestamps for the four action cooldowns.
///
/// Booster and grading cooldowns are fixed durations from
/// configuration; the daily claim always becomes available again at the
/// next local midnight. Readiness checks against the wall clock belong
/// to the command layer.
pub struct CooldownPolicy {
    basic_booster_secs: i64,
    promo_booster_secs: i64,
    grading_secs: i64,
}

impl CooldownPolicy {
    /// Creates a policy from the configured durations.
    #[must_use]
    pub fn new(config: &CooldownConfig) -> Self {
        Self {
            basic_booster_secs: i64::try_from(config.basic_booster_secs).unwrap_or(i64::MAX),
            promo_booster_secs: i64::try_from(config.promo_booster_secs).unwrap_or(i64::MAX),
            grading_secs: i64::try_from(config.grading_secs).unwrap_or(i64::MAX),
        }
    }

    /// Ready-at timestamp for the given cooldown, reset at `now`.
    #[must_use]
    pub fn ready_at(&self, kind: CooldownKind, now: DateTime<Local>) -> i64 {
        match kind {
            CooldownKind::BasicBooster => now.timestamp() + self.basic_booster_secs,
            CooldownKind::PromoBooster => now.timestamp() + self.promo_booster_secs,
            CooldownKind::Grading => now.timestamp() + self.grading_secs,
            CooldownKind::DailyClaim => next_local_midnight(now),
        }
    }
}

/// Unix timestamp of 00:00 on the day after `now`, in local time.
///
/// Also decides daily-quest staleness: a quest pair whose refresh
/// timestamp is at or before `now` is regenerated on the next
/// interaction. Falls back to `now + 24h` when the calendar day cannot
/// be produced (DST gap at midnight, date overflow).
#[must_use]
pub fn next_local_midnight(now: DateTime<Local>) -> i64 {
    let fallback = now.timestamp() + SECONDS_PER_DAY;
    let Some(tomorrow) = now.date_naive().checked_add_days(Days::new(1)) else {
        return fallback;
    };
    let Some(midnight) = tomorrow.and_hms_opt(0, 0, 0) else {
        return fallback;
    };
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map_or(fallback, |dt| dt.timestamp())
}
