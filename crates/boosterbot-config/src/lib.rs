//! # Boosterbot Config
//!
//! Layered configuration for the bot: packaged defaults, environment
//! TOML overrides, then `BOOSTERBOT_` environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::ConfigLoader;
