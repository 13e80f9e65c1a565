use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Processing state reported by the server for an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processing,
    Processed,
    Failed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// An uploaded file associated with a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier assigned by the server
    pub id: String,
    /// Original filename
    pub name: String,
    /// Processing state; the server may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

impl Document {
    /// Status to display. A missing status is shown as processed.
    pub fn display_status(&self) -> DocumentStatus {
        self.status.unwrap_or(DocumentStatus::Processed)
    }
}

/// A local file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            mime_type: None,
        }
    }

    /// Lowercased extension of the file name, if it has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}
