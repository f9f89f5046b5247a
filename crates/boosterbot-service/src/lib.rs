//! # Boosterbot Service
//!
//! Business logic for the collectible-card mini-game: daily quest
//! generation and progress, cooldown timestamps, collection mutation,
//! and the `UserService` facade the command layer calls into.

pub mod cooldown;
pub mod grade_parser;
pub mod quest_engine;
pub mod user_service;

pub use cooldown::CooldownPolicy;
pub use grade_parser::GradeParser;
pub use user_service::{UserService, UserServiceImpl};
