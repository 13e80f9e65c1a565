use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named container grouping documents and a conversation.
///
/// The same shape is used for the open project and for the summaries listed
/// on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier assigned by the server
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional free-form description. Absent and empty render the same way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp assigned by the server
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Returns the description only when it has something to show.
    pub fn visible_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}

/// Input for creating a project from the dashboard dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
}

impl NewProject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
