//! # Boosterbot Localization
//!
//! Localized string lookup for the bot. The catalogue is embedded; the
//! command layer asks for strings by key and language, and the grading
//! mini-game resolves user-typed grade names through the per-language
//! grade tables.

pub mod catalog;

pub use catalog::*;
