use super::scroll::ScrollManager;
use crate::auth::{AuthContext, GateOutcome, SessionGate};
use crate::document::DocumentStore;
use crate::error_slot::ErrorSlot;
use crate::message::{MessageStore, StreamEntry};
use crate::project::{ProjectStore, TitleKey};
use crate::route::RouteParamResolver;
use docent_core::config::ClientConfig;
use docent_core::document::{Document, UploadFile};
use docent_core::project::Project;
use docent_core::route::{Navigator, Route, RouteParams};
use docent_core::service::WorkspaceService;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// What the project screen should render as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectViewStatus {
    /// Session unresolved or the joint load has not settled.
    Loading,
    /// Nobody is signed in; navigation to landing already happened.
    Redirected,
    /// Loading finished without a project.
    NotFound,
    Ready,
}

/// Content of the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPanel {
    /// No messages yet; carries the prompt to show instead.
    Empty(String),
    Messages(Vec<StreamEntry>),
}

/// Project screen: coordinates the session gate, the route id and the three
/// project-scoped stores.
///
/// The initial load of project, documents and messages runs concurrently
/// and the screen stays in [`ProjectViewStatus::Loading`] until all three
/// settled. A failed load writes the error slot while the others still
/// display. Later mutations go straight to their store and never bring the
/// loading state back.
pub struct ProjectView {
    gate: SessionGate,
    route: RouteParamResolver,
    navigator: Arc<dyn Navigator>,
    project: ProjectStore,
    documents: DocumentStore,
    messages: MessageStore,
    errors: ErrorSlot,
    empty_prompt: String,
    mounted: AtomicBool,
    loading: AtomicBool,
    redirected: AtomicBool,
    scroll: Mutex<ScrollManager>,
}

impl ProjectView {
    pub fn new(
        service: Arc<dyn WorkspaceService>,
        auth: &AuthContext,
        navigator: Arc<dyn Navigator>,
        config: &ClientConfig,
    ) -> Self {
        let errors = ErrorSlot::new();
        Self {
            gate: SessionGate::new(auth, navigator.clone()),
            route: RouteParamResolver::new(),
            navigator,
            project: ProjectStore::new(service.clone(), errors.clone()),
            documents: DocumentStore::new(
                service.clone(),
                errors.clone(),
                config.documents.clone(),
            ),
            messages: MessageStore::new(service, errors.clone()),
            errors,
            empty_prompt: config.chat.empty_prompt.clone(),
            mounted: AtomicBool::new(false),
            loading: AtomicBool::new(true),
            redirected: AtomicBool::new(false),
            scroll: Mutex::new(ScrollManager::new()),
        }
    }

    /// Runs the mount sequence: resolve the route id and the session, then
    /// load everything at once. Later calls only report the status.
    pub async fn mount<F>(&self, params: F) -> ProjectViewStatus
    where
        F: Future<Output = RouteParams>,
    {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return self.status().await;
        }

        let (project_id, outcome) = tokio::join!(self.route.resolve(params), self.gate.settle());
        match outcome {
            GateOutcome::Redirected => {
                self.redirected.store(true, Ordering::SeqCst);
                return ProjectViewStatus::Redirected;
            }
            GateOutcome::Authenticated(identity) => {
                tracing::debug!("[ProjectView] session ready for {}", identity.username);
            }
        }

        if let Some(project_id) = project_id {
            self.load_all(&project_id).await;
        }
        self.status().await
    }

    async fn load_all(&self, project_id: &str) {
        self.loading.store(true, Ordering::SeqCst);
        let (project, documents, messages) = tokio::join!(
            self.project.load(project_id),
            self.documents.load(project_id),
            self.messages.load(project_id),
        );
        self.loading.store(false, Ordering::SeqCst);

        tracing::info!(
            "[ProjectView] initial load settled: project={}, documents={}, messages={}",
            project.is_ok(),
            documents.is_ok(),
            messages.is_ok()
        );
    }

    pub async fn status(&self) -> ProjectViewStatus {
        if self.redirected.load(Ordering::SeqCst) {
            return ProjectViewStatus::Redirected;
        }
        if !self.gate.is_resolved() || self.loading.load(Ordering::SeqCst) {
            return ProjectViewStatus::Loading;
        }
        if self.project.project().await.is_none() {
            return ProjectViewStatus::NotFound;
        }
        ProjectViewStatus::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn project_id(&self) -> Option<String> {
        self.route.project_id()
    }

    pub fn project_store(&self) -> &ProjectStore {
        &self.project
    }

    pub fn document_store(&self) -> &DocumentStore {
        &self.documents
    }

    pub fn message_store(&self) -> &MessageStore {
        &self.messages
    }

    pub async fn project(&self) -> Option<Project> {
        self.project.project().await
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.documents.documents().await
    }

    /// Header count, read from the document store each time.
    pub async fn document_count(&self) -> usize {
        self.documents.len().await
    }

    pub async fn chat_panel(&self) -> ChatPanel {
        let entries = self.messages.entries().await;
        if entries.is_empty() {
            ChatPanel::Empty(self.empty_prompt.clone())
        } else {
            ChatPanel::Messages(entries)
        }
    }

    pub async fn error_message(&self) -> Option<String> {
        self.errors.message().await
    }

    pub fn errors(&self) -> &ErrorSlot {
        &self.errors
    }

    /// Index of the message to scroll to, when the conversation length
    /// changed since the last call.
    pub async fn sync_scroll(&self) -> Option<usize> {
        let len = self.messages.len().await;
        let mut scroll = self.scroll.lock().await;
        scroll.observe(len);
        scroll.take_scroll_request()
    }

    // ------------------------------------------------------------------
    // Event handlers. Remote failures already sit in the error slot, so the
    // handlers only log the returned errors.
    // ------------------------------------------------------------------

    /// Upload control changed. `None` means the picker was dismissed.
    pub async fn on_file_selected(&self, file: Option<UploadFile>) {
        let (Some(project_id), Some(file)) = (self.project_id(), file) else {
            return;
        };
        if let Err(e) = self.documents.upload(&project_id, file).await {
            tracing::debug!("[ProjectView] upload not applied: {}", e);
        }
    }

    pub async fn on_delete_document(&self, document_id: &str) {
        let Some(project_id) = self.project_id() else {
            return;
        };
        if let Err(e) = self.documents.delete(&project_id, document_id).await {
            tracing::debug!("[ProjectView] delete not applied: {}", e);
        }
    }

    pub async fn on_input_changed(&self, text: impl Into<String>) {
        self.messages.set_input(text).await;
    }

    pub async fn on_submit_message(&self) {
        let Some(project_id) = self.project_id() else {
            return;
        };
        if let Err(e) = self.messages.submit(&project_id).await {
            tracing::debug!("[ProjectView] send not applied: {}", e);
        }
    }

    pub async fn on_begin_edit_title(&self) {
        self.project.begin_edit_title().await;
    }

    pub async fn on_title_changed(&self, text: impl Into<String>) {
        self.project.set_draft_title(text).await;
    }

    pub async fn on_save_title(&self) {
        let Some(project_id) = self.project_id() else {
            return;
        };
        if let Err(e) = self.project.save_title(&project_id).await {
            tracing::debug!("[ProjectView] title not saved: {}", e);
        }
    }

    pub async fn on_cancel_edit_title(&self) {
        self.project.cancel_edit_title().await;
    }

    /// Key pressed inside the title editor.
    pub async fn on_title_key(&self, key_name: &str) {
        let (Some(project_id), Some(key)) = (self.project_id(), TitleKey::from_key_name(key_name))
        else {
            return;
        };
        if let Some(Err(e)) = self.project.handle_title_key(&project_id, key).await {
            tracing::debug!("[ProjectView] title not saved: {}", e);
        }
    }

    /// Leaves the project for the dashboard.
    pub fn close(&self) {
        self.navigator.navigate(Route::Dashboard);
    }
}
