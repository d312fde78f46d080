//! Chat message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// A single entry of the chat log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the log, starting at 1. Never reused.
    pub id: u64,
    pub text: String,
    pub origin: Author,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(id: u64, origin: Author, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin,
            sent_at: Utc::now(),
        }
    }

    pub fn is_from_assistant(&self) -> bool {
        self.origin == Author::Assistant
    }
}
