use crate::error_slot::ErrorSlot;
use docent_core::project::Project;
use docent_core::service::WorkspaceService;
use docent_core::{DocentError, ErrorKind, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keyboard signals understood by the title editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKey {
    /// Same as pressing the save control.
    Accept,
    /// Same as pressing the cancel control.
    Cancel,
}

impl TitleKey {
    /// Maps a key name as reported by the input layer.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Accept),
            "Escape" => Some(Self::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ProjectState {
    project: Option<Project>,
    /// Draft title; `Some` only while editing.
    draft_title: Option<String>,
    /// Bumped whenever a saved update replaced the project.
    revision: u64,
}

/// Holds the currently open project and its title edit lifecycle.
pub struct ProjectStore {
    service: Arc<dyn WorkspaceService>,
    errors: ErrorSlot,
    state: RwLock<ProjectState>,
}

impl ProjectStore {
    pub fn new(service: Arc<dyn WorkspaceService>, errors: ErrorSlot) -> Self {
        Self {
            service,
            errors,
            state: RwLock::new(ProjectState::default()),
        }
    }

    /// Fetches the project and replaces the stored copy.
    ///
    /// A response that was requested before a title save completed is older
    /// than the saved copy and is dropped.
    pub async fn load(&self, project_id: &str) -> Result<Project> {
        tracing::debug!("[ProjectStore] load() project_id={}", project_id);
        let issued = self.state.read().await.revision;
        match self.service.fetch_project(project_id).await {
            Ok(project) => {
                let mut state = self.state.write().await;
                if state.revision != issued
                    && let Some(saved) = state.project.clone()
                {
                    tracing::debug!("[ProjectStore] dropping response older than saved title");
                    return Ok(saved);
                }
                state.project = Some(project.clone());
                Ok(project)
            }
            Err(e) => {
                tracing::warn!("[ProjectStore] load failed: {}", e);
                let err = DocentError::Fetch(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    pub async fn project(&self) -> Option<Project> {
        self.state.read().await.project.clone()
    }

    pub async fn title(&self) -> Option<String> {
        self.state.read().await.project.as_ref().map(|p| p.title.clone())
    }

    /// Snapshots the current title into a draft and enters editing.
    ///
    /// Returns false when no project is loaded yet.
    pub async fn begin_edit_title(&self) -> bool {
        let mut state = self.state.write().await;
        let Some(title) = state.project.as_ref().map(|p| p.title.clone()) else {
            return false;
        };
        state.draft_title = Some(title);
        true
    }

    /// Replaces the draft while editing. Ignored when not editing.
    pub async fn set_draft_title(&self, draft: impl Into<String>) {
        let mut state = self.state.write().await;
        if let Some(current) = state.draft_title.as_mut() {
            *current = draft.into();
        }
    }

    pub async fn is_editing_title(&self) -> bool {
        self.state.read().await.draft_title.is_some()
    }

    pub async fn draft_title(&self) -> Option<String> {
        self.state.read().await.draft_title.clone()
    }

    /// Saves the draft title.
    ///
    /// An empty or whitespace draft is rejected without contacting the
    /// server and editing stays active. On success the whole project is
    /// replaced with the server's copy and editing ends; on failure editing
    /// stays active so the user can retry or cancel.
    pub async fn save_title(&self, project_id: &str) -> Result<Project> {
        let draft = self.state.read().await.draft_title.clone();
        let Some(draft) = draft else {
            return Err(DocentError::validation("Title is not being edited"));
        };
        if draft.trim().is_empty() {
            return Err(DocentError::validation("Title cannot be empty"));
        }

        tracing::debug!("[ProjectStore] save_title() project_id={}", project_id);
        match self.service.update_project(project_id, &draft).await {
            Ok(updated) => {
                {
                    let mut state = self.state.write().await;
                    state.project = Some(updated.clone());
                    state.draft_title = None;
                    state.revision += 1;
                }
                self.errors.clear_kind(ErrorKind::Update).await;
                Ok(updated)
            }
            Err(e) => {
                tracing::warn!("[ProjectStore] title update failed: {}", e);
                let err = DocentError::Update(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    /// Discards the draft and leaves editing. No network call.
    pub async fn cancel_edit_title(&self) {
        self.state.write().await.draft_title = None;
    }

    /// Dispatches a keyboard signal from the title editor.
    pub async fn handle_title_key(&self, project_id: &str, key: TitleKey) -> Option<Result<Project>> {
        match key {
            TitleKey::Accept => Some(self.save_title(project_id).await),
            TitleKey::Cancel => {
                self.cancel_edit_title().await;
                None
            }
        }
    }
}
