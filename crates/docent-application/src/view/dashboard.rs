use crate::auth::{AuthContext, GateOutcome, SessionGate};
use crate::error_slot::ErrorSlot;
use docent_core::project::{NewProject, Project};
use docent_core::route::{Navigator, Route};
use docent_core::service::WorkspaceService;
use docent_core::{DocentError, ErrorKind, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardStatus {
    Loading,
    Redirected,
    Ready,
}

/// One cell of the project grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardTile {
    Project(Project),
    /// Trailing "Create new project" affordance, always present.
    CreateNew,
}

#[derive(Debug, Default)]
struct DashboardState {
    /// Newest first after local creations.
    projects: Vec<Project>,
    /// Draft of the create dialog; `Some` while the dialog is open.
    create_draft: Option<NewProject>,
}

/// Project listing screen.
///
/// Owns the project summaries while the dashboard is displayed. Creation and
/// deletion are pessimistic, like document mutations on the project screen.
pub struct DashboardView {
    service: Arc<dyn WorkspaceService>,
    gate: SessionGate,
    navigator: Arc<dyn Navigator>,
    errors: ErrorSlot,
    mounted: AtomicBool,
    loading: AtomicBool,
    redirected: AtomicBool,
    state: RwLock<DashboardState>,
}

impl DashboardView {
    pub fn new(
        service: Arc<dyn WorkspaceService>,
        auth: &AuthContext,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            service,
            gate: SessionGate::new(auth, navigator.clone()),
            navigator,
            errors: ErrorSlot::new(),
            mounted: AtomicBool::new(false),
            loading: AtomicBool::new(true),
            redirected: AtomicBool::new(false),
            state: RwLock::new(DashboardState::default()),
        }
    }

    /// Waits for the session, then lists the projects once.
    pub async fn mount(&self) -> DashboardStatus {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return self.status();
        }

        if self.gate.settle().await == GateOutcome::Redirected {
            self.redirected.store(true, Ordering::SeqCst);
            return DashboardStatus::Redirected;
        }
        let _ = self.load().await;
        self.status()
    }

    pub fn status(&self) -> DashboardStatus {
        if self.redirected.load(Ordering::SeqCst) {
            DashboardStatus::Redirected
        } else if !self.gate.is_resolved() || self.loading.load(Ordering::SeqCst) {
            DashboardStatus::Loading
        } else {
            DashboardStatus::Ready
        }
    }

    pub async fn load(&self) -> Result<Vec<Project>> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.service.fetch_projects().await;
        let outcome = match result {
            Ok(projects) => {
                tracing::debug!("[DashboardView] loaded {} projects", projects.len());
                self.state.write().await.projects = projects.clone();
                Ok(projects)
            }
            Err(e) => {
                tracing::warn!("[DashboardView] project list failed: {}", e);
                let err = DocentError::Fetch(e);
                self.errors.record(&err).await;
                Err(err)
            }
        };
        self.loading.store(false, Ordering::SeqCst);
        outcome
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.state.read().await.projects.clone()
    }

    /// Grid contents: every project, then the create affordance.
    pub async fn tiles(&self) -> Vec<DashboardTile> {
        let state = self.state.read().await;
        state
            .projects
            .iter()
            .cloned()
            .map(DashboardTile::Project)
            .chain(std::iter::once(DashboardTile::CreateNew))
            .collect()
    }

    pub async fn open_create_dialog(&self) {
        let mut state = self.state.write().await;
        if state.create_draft.is_none() {
            state.create_draft = Some(NewProject::default());
        }
    }

    pub async fn close_create_dialog(&self) {
        self.state.write().await.create_draft = None;
    }

    pub async fn is_create_dialog_open(&self) -> bool {
        self.state.read().await.create_draft.is_some()
    }

    pub async fn create_draft(&self) -> Option<NewProject> {
        self.state.read().await.create_draft.clone()
    }

    pub async fn set_new_project_title(&self, title: impl Into<String>) {
        if let Some(draft) = self.state.write().await.create_draft.as_mut() {
            draft.title = title.into();
        }
    }

    pub async fn set_new_project_description(&self, description: impl Into<String>) {
        if let Some(draft) = self.state.write().await.create_draft.as_mut() {
            draft.description = description.into();
        }
    }

    /// Creates the drafted project.
    ///
    /// A blank title is rejected locally. On success the project is
    /// prepended and the dialog closes; on failure the dialog stays open.
    pub async fn create_project(&self) -> Result<Project> {
        let Some(draft) = self.create_draft().await else {
            return Err(DocentError::validation("Create dialog is not open"));
        };
        if !draft.has_title() {
            return Err(DocentError::validation("Title cannot be empty"));
        }

        match self
            .service
            .create_project(&draft.title, &draft.description)
            .await
        {
            Ok(created) => {
                {
                    let mut state = self.state.write().await;
                    state.projects.retain(|p| p.id != created.id);
                    state.projects.insert(0, created.clone());
                    state.create_draft = None;
                }
                tracing::info!("[DashboardView] created project {}", created.id);
                self.errors.clear_kind(ErrorKind::Create).await;
                Ok(created)
            }
            Err(e) => {
                tracing::warn!("[DashboardView] create failed: {}", e);
                let err = DocentError::Create(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    /// Deletes a project; it leaves the grid only after the server confirmed.
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        match self.service.delete_project(project_id).await {
            Ok(()) => {
                self.state
                    .write()
                    .await
                    .projects
                    .retain(|p| p.id != project_id);
                self.errors.clear_kind(ErrorKind::Delete).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("[DashboardView] delete of {} failed: {}", project_id, e);
                let err = DocentError::Delete(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    pub fn open_project(&self, project_id: &str) {
        self.navigator
            .navigate(Route::Project(project_id.to_string()));
    }

    pub async fn error_message(&self) -> Option<String> {
        self.errors.message().await
    }
}
