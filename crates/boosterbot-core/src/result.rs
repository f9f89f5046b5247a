//! Result type aliases for Boosterbot.

use crate::BotError;

/// A specialized `Result` type for bot operations.
pub type BotResult<T> = Result<T, BotError>;
