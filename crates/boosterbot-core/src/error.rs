//! Unified error types for all layers of the bot.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Boosterbot.
///
/// Most game-rule failures are not errors at all: a missing user is
/// reported as `Ok(None)` and a violated constraint (not enough cards,
/// not enough money) as `Ok(false)`. The variants below cover the
/// faults that cannot be expressed as a regular return value.
#[derive(Error, Debug)]
pub enum BotError {
    /// Resource not found where the caller required it to exist.
    #[error("resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Invalid input that cannot be mapped onto the domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// A game-rule constraint was violated.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BotError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Constraint(_) => "CONSTRAINT_VIOLATION",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint<T: Into<String>>(message: T) -> Self {
        Self::Constraint(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage<T: Into<String>>(message: T) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}
