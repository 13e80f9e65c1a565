//! Hand-written collaborator doubles shared by the unit tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use docent_core::RemoteError;
use docent_core::auth::UserIdentity;
use docent_core::document::{Document, DocumentStatus, UploadFile};
use docent_core::message::{Message, MessageRole};
use docent_core::project::Project;
use docent_core::route::{Navigator, Route};
use docent_core::service::{RemoteResult, WorkspaceService};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Identifies a collaborator call for failure injection and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    FetchProjects,
    CreateProject,
    DeleteProject,
    FetchProject,
    UpdateProject,
    FetchDocuments,
    UploadDocument,
    DeleteDocument,
    FetchMessages,
    SendMessage,
}

#[derive(Default)]
struct MockState {
    projects: Vec<Project>,
    documents: Vec<Document>,
    messages: Vec<Message>,
    failures: HashMap<Call, String>,
    held: HashSet<Call>,
    calls: Vec<(Call, String)>,
    in_flight: HashMap<Call, usize>,
    max_in_flight: HashMap<Call, usize>,
    title_echo: Option<String>,
    fresh_reads: bool,
    next_id: usize,
}

/// In-memory stand-in for the remote workspace service.
///
/// Calls can be made to fail with a message, or held open until released so
/// tests can interleave operations deterministically. A held fetch answers
/// with the server state at request time unless [`Self::fresh_reads`] is on.
#[derive(Default)]
pub struct MockWorkspaceService {
    state: Mutex<MockState>,
    release: Notify,
}

impl MockWorkspaceService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_project(self: Arc<Self>, project: Project) -> Arc<Self> {
        self.state.lock().unwrap().projects.push(project);
        self
    }

    pub fn with_documents(self: Arc<Self>, documents: Vec<Document>) -> Arc<Self> {
        self.set_documents(documents);
        self
    }

    pub fn set_documents(&self, documents: Vec<Document>) {
        self.state.lock().unwrap().documents = documents;
    }

    pub fn with_messages(self: Arc<Self>, messages: Vec<Message>) -> Arc<Self> {
        self.state.lock().unwrap().messages = messages;
        self
    }

    pub fn fail(&self, call: Call, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(call, message.to_string());
    }

    pub fn succeed(&self, call: Call) {
        self.state.lock().unwrap().failures.remove(&call);
    }

    /// Makes every later `call` wait until [`Self::release_all`].
    pub fn hold(&self, call: Call) {
        self.state.lock().unwrap().held.insert(call);
    }

    pub fn release_all(&self) {
        self.state.lock().unwrap().held.clear();
        self.release.notify_waiters();
    }

    /// Server-side rewrite applied to renamed titles.
    pub fn echo_title(&self, title: &str) {
        self.state.lock().unwrap().title_echo = Some(title.to_string());
    }

    /// Held fetches answer with the state at release time instead.
    pub fn fresh_reads(&self) {
        self.state.lock().unwrap().fresh_reads = true;
    }

    pub fn count(&self, call: Call) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(c, _)| *c == call)
            .count()
    }

    pub fn args(&self, call: Call) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(c, _)| *c == call)
            .map(|(_, arg)| arg.clone())
            .collect()
    }

    pub fn in_flight(&self, call: Call) -> usize {
        *self.state.lock().unwrap().in_flight.get(&call).unwrap_or(&0)
    }

    pub fn max_in_flight(&self, call: Call) -> usize {
        *self
            .state
            .lock()
            .unwrap()
            .max_in_flight
            .get(&call)
            .unwrap_or(&0)
    }

    /// Reads `pick` at request time, waits like [`Self::enter`], then answers
    /// with that snapshot or a fresh read.
    async fn read<T>(
        &self,
        call: Call,
        arg: &str,
        pick: impl Fn(&MockState) -> T,
    ) -> RemoteResult<T> {
        let snapshot = pick(&*self.state.lock().unwrap());
        self.enter(call, arg).await?;
        let state = self.state.lock().unwrap();
        Ok(if state.fresh_reads {
            pick(&*state)
        } else {
            snapshot
        })
    }

    async fn enter(&self, call: Call, arg: &str) -> RemoteResult<()> {
        {
            let mut state = self.state.lock().unwrap();
            state.calls.push((call, arg.to_string()));
            let current = state.in_flight.entry(call).or_insert(0);
            *current += 1;
            let current = *current;
            let max = state.max_in_flight.entry(call).or_insert(0);
            *max = (*max).max(current);
        }

        loop {
            let released = self.release.notified();
            if !self.state.lock().unwrap().held.contains(&call) {
                break;
            }
            released.await;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(current) = state.in_flight.get_mut(&call) {
            *current -= 1;
        }
        match state.failures.get(&call) {
            Some(message) => Err(RemoteError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WorkspaceService for MockWorkspaceService {
    async fn fetch_projects(&self) -> RemoteResult<Vec<Project>> {
        self.read(Call::FetchProjects, "", |s| s.projects.clone())
            .await
    }

    async fn create_project(&self, title: &str, description: &str) -> RemoteResult<Project> {
        self.enter(Call::CreateProject, title).await?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let project = Project {
            id: format!("created-{}", state.next_id),
            title: title.to_string(),
            description: Some(description.to_string()),
            created_at: fixed_time(),
        };
        state.projects.insert(0, project.clone());
        Ok(project)
    }

    async fn delete_project(&self, project_id: &str) -> RemoteResult<()> {
        self.enter(Call::DeleteProject, project_id).await?;
        self.state
            .lock()
            .unwrap()
            .projects
            .retain(|p| p.id != project_id);
        Ok(())
    }

    async fn fetch_project(&self, project_id: &str) -> RemoteResult<Project> {
        self.read(Call::FetchProject, project_id, |s| {
            s.projects.iter().find(|p| p.id == project_id).cloned()
        })
        .await?
        .ok_or_else(|| RemoteError::new("Not found."))
    }

    async fn update_project(&self, project_id: &str, title: &str) -> RemoteResult<Project> {
        self.enter(Call::UpdateProject, title).await?;
        let mut state = self.state.lock().unwrap();
        let echoed = state.title_echo.clone().unwrap_or_else(|| title.to_string());
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| RemoteError::new("Not found."))?;
        project.title = echoed;
        Ok(project.clone())
    }

    async fn fetch_documents(&self, project_id: &str) -> RemoteResult<Vec<Document>> {
        self.read(Call::FetchDocuments, project_id, |s| s.documents.clone())
            .await
    }

    async fn upload_document(
        &self,
        _project_id: &str,
        file: &UploadFile,
    ) -> RemoteResult<Document> {
        self.enter(Call::UploadDocument, &file.name).await?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let document = Document {
            id: format!("uploaded-{}", state.next_id),
            name: file.name.clone(),
            status: Some(DocumentStatus::Processed),
        };
        state.documents.insert(0, document.clone());
        Ok(document)
    }

    async fn delete_document(&self, _project_id: &str, document_id: &str) -> RemoteResult<()> {
        self.enter(Call::DeleteDocument, document_id).await?;
        self.state
            .lock()
            .unwrap()
            .documents
            .retain(|d| d.id != document_id);
        Ok(())
    }

    async fn fetch_messages(&self, project_id: &str) -> RemoteResult<Vec<Message>> {
        self.read(Call::FetchMessages, project_id, |s| s.messages.clone())
            .await
    }

    async fn send_message(&self, _project_id: &str, text: &str) -> RemoteResult<Message> {
        self.enter(Call::SendMessage, text).await?;
        let reply = Message {
            role: MessageRole::Assistant,
            content: format!("Answer to: {}", text),
            created_at: fixed_time(),
        };
        let mut state = self.state.lock().unwrap();
        state.messages.push(Message::user(text));
        state.messages.push(reply.clone());
        Ok(reply)
    }
}

/// Records every navigation instead of performing it.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        created_at: fixed_time(),
    }
}

pub fn document(id: &str, name: &str) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        status: None,
    }
}

pub fn user() -> UserIdentity {
    UserIdentity {
        id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
    }
}

/// Lets spawned tasks run until `condition` holds.
pub async fn settle_until(condition: impl Fn() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
