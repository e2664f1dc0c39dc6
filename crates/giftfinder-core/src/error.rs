//! Error types for the GiftFinder data layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::IdentityError;

/// A shared error type for the whole data layer.
///
/// Identity collaborator failures keep their own classified type
/// ([`IdentityError`]) because the session wrapper propagates them to the
/// caller unchanged; this enum wraps them only for callers that fold every
/// failure into one type.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GiftError {
    /// IO error (file system / durable storage operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity collaborator error, propagated unchanged
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Recommendation collaborator error
    #[error("Recommendation error: {0}")]
    Recommendation(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GiftError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Recommendation error
    pub fn recommendation(message: impl Into<String>) -> Self {
        Self::Recommendation(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for GiftError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GiftError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GiftError>`.
pub type Result<T> = std::result::Result<T, GiftError>;
