//! # Boosterbot Core
//!
//! Core types, domain entities, and error definitions for Boosterbot.
//! This crate provides the foundational abstractions used across all
//! layers of the bot: the user aggregate, quest and card value objects,
//! the unified error type, and the tracing bootstrap.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
