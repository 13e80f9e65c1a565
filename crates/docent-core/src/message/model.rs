use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the author of a message in a project conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Reply produced by the assistant from the project's documents.
    Assistant,
}

/// A single turn in a project's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message author.
    pub role: MessageRole,
    /// The content of the message (markdown for assistant replies).
    pub content: String,
    /// Server timestamp, or the client clock for a locally composed turn.
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds a user turn stamped with the local clock.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
