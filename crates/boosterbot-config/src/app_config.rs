//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Cooldown durations for timed actions.
    #[serde(default)]
    pub cooldowns: CooldownConfig,

    /// Game tuning values.
    #[serde(default)]
    pub game: GameConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "boosterbot".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Fixed-duration cooldowns, in seconds.
///
/// The daily-claim cooldown has no entry here: it always ends at the
/// next local midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownConfig {
    /// Seconds between basic booster openings.
    pub basic_booster_secs: u64,
    /// Seconds between promo booster openings.
    pub promo_booster_secs: u64,
    /// Seconds between gradings.
    pub grading_secs: u64,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            basic_booster_secs: 21_600,
            promo_booster_secs: 43_200,
            grading_secs: 14_400,
        }
    }
}

impl CooldownConfig {
    /// Basic booster cooldown as a `Duration`.
    #[must_use]
    pub const fn basic_booster(&self) -> Duration {
        Duration::from_secs(self.basic_booster_secs)
    }

    /// Promo booster cooldown as a `Duration`.
    #[must_use]
    pub const fn promo_booster(&self) -> Duration {
        Duration::from_secs(self.promo_booster_secs)
    }

    /// Grading cooldown as a `Duration`.
    #[must_use]
    pub const fn grading(&self) -> Duration {
        Duration::from_secs(self.grading_secs)
    }
}

/// Game tuning values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of users on the collection leaderboard.
    pub leaderboard_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: 50,
        }
    }
}
