//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Text shown in the chat panel when the conversation is empty.
pub const EMPTY_CONVERSATION_PROMPT: &str = "No messages yet. Start a conversation!";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub documents: DocumentSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Upload acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// File extensions (without dot) accepted for upload.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

impl DocumentSettings {
    /// Case-insensitive check against the accepted list.
    pub fn accepts(&self, extension: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

fn default_accepted_extensions() -> Vec<String> {
    ["pdf", "doc", "docx", "txt"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_empty_prompt")]
    pub empty_prompt: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            empty_prompt: default_empty_prompt(),
        }
    }
}

fn default_empty_prompt() -> String {
    EMPTY_CONVERSATION_PROMPT.to_string()
}

/// Logging configuration. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
