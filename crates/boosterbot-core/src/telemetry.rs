//! Tracing bootstrap for the bot process.

use crate::{BotError, BotResult};
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, falling back to
/// `default_filter` otherwise. Returns an error if a global subscriber
/// has already been installed.
pub fn init_tracing(default_filter: &str) -> BotResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| BotError::internal(format!("failed to install tracing subscriber: {e}")))
}
