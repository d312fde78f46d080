//! Error types for the campus assistant.

use crate::chat::SessionStatus;
use crate::portal::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole workspace.
///
/// Startup problems (`Config`) are fatal. The chat precondition variants
/// (`InvalidState`, `EmptyInput`, `Disposed`, `NoRuntime`) are local
/// rejections that the interactive surface ignores.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CampusError {
    /// Startup configuration error (knowledge base totality, rule table, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// `submit` called while the session is not idle
    #[error("Invalid session state: submit rejected while {status}")]
    InvalidState { status: SessionStatus },

    /// `submit` called with text that is blank after trimming
    #[error("Input is empty")]
    EmptyInput,

    /// The session has been torn down
    #[error("Session has been disposed")]
    Disposed,

    /// `submit` called with no Tokio runtime to schedule the reply on
    #[error("No async runtime available to schedule the reply")]
    NoRuntime,

    /// A view was mounted without the auth gate's approval
    #[error("Role '{role}' is not authorized for this view")]
    Unauthorized { role: Role },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Record failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl CampusError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the rejections `submit` produces on a bad precondition.
    ///
    /// These never leave partial state behind and are safe to ignore.
    pub fn is_rejected_submit(&self) -> bool {
        matches!(
            self,
            Self::InvalidState { .. } | Self::EmptyInput | Self::Disposed | Self::NoRuntime
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<toml::de::Error> for CampusError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CampusError>`.
pub type Result<T> = std::result::Result<T, CampusError>;
