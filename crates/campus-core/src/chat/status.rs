use super::Message;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Busy/idle state of a chat session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    /// Waiting for user input.
    #[default]
    Idle,
    /// A reply is scheduled; new input is rejected until it lands.
    AwaitingReply,
}

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub is_awaiting_reply: bool,
}

impl SessionSnapshot {
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
