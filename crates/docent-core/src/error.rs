//! Error types for the Docent client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure reported by the remote workspace service.
///
/// The message is human readable and is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The category of a failure, used to decide which success clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Fetch,
    Validation,
    Upload,
    Delete,
    Send,
    Update,
    Create,
    Config,
    Io,
    Serialization,
}

/// A shared error type for the entire Docent client.
///
/// Remote mutations carry the collaborator's [`RemoteError`] so its message
/// can be surfaced unchanged; local failures carry their own description.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocentError {
    /// An initial load (project, documents, messages, project list) failed.
    #[error("{0}")]
    Fetch(RemoteError),

    /// A local precondition was not met; nothing was sent to the server.
    #[error("{0}")]
    Validation(String),

    /// Uploading a document failed.
    #[error("{0}")]
    Upload(RemoteError),

    /// Deleting a document or project failed.
    #[error("{0}")]
    Delete(RemoteError),

    /// Sending a chat message failed.
    #[error("{0}")]
    Send(RemoteError),

    /// Updating project metadata failed.
    #[error("{0}")]
    Update(RemoteError),

    /// Creating a project failed.
    #[error("{0}")]
    Create(RemoteError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl DocentError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Upload(_) => ErrorKind::Upload,
            Self::Delete(_) => ErrorKind::Delete,
            Self::Send(_) => ErrorKind::Send,
            Self::Update(_) => ErrorKind::Update,
            Self::Create(_) => ErrorKind::Create,
            Self::Config(_) => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
            Self::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true when the failure came back from the remote service.
    pub fn is_remote(&self) -> bool {
        self.remote().is_some()
    }

    /// The collaborator error behind a remote failure, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Fetch(e)
            | Self::Upload(e)
            | Self::Delete(e)
            | Self::Send(e)
            | Self::Update(e)
            | Self::Create(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for DocentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DocentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for DocentError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for DocentError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, DocentError>`.
pub type Result<T> = std::result::Result<T, DocentError>;
