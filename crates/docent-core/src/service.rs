//! Remote workspace service contract.
//!
//! Defines everything the client state layer needs from the server that
//! stores projects, documents and messages and produces assistant replies.

use crate::document::{Document, UploadFile};
use crate::error::RemoteError;
use crate::message::Message;
use crate::project::Project;
use async_trait::async_trait;

/// Result type returned by every collaborator call.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// An abstract client for the remote workspace service.
///
/// This trait decouples the stores from the transport (HTTP, IPC, an
/// in-process fake). Every call is request/response and may fail with a
/// human-readable [`RemoteError`].
#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// Lists the signed-in user's projects.
    async fn fetch_projects(&self) -> RemoteResult<Vec<Project>>;

    /// Creates a project and returns the server's copy.
    async fn create_project(&self, title: &str, description: &str) -> RemoteResult<Project>;

    /// Deletes a project together with its documents and messages.
    async fn delete_project(&self, project_id: &str) -> RemoteResult<()>;

    /// Fetches a single project.
    async fn fetch_project(&self, project_id: &str) -> RemoteResult<Project>;

    /// Renames a project and returns the updated server copy.
    async fn update_project(&self, project_id: &str, title: &str) -> RemoteResult<Project>;

    /// Lists the documents of a project.
    async fn fetch_documents(&self, project_id: &str) -> RemoteResult<Vec<Document>>;

    /// Uploads a file and returns the created document.
    async fn upload_document(&self, project_id: &str, file: &UploadFile)
    -> RemoteResult<Document>;

    /// Deletes a document from a project.
    async fn delete_document(&self, project_id: &str, document_id: &str) -> RemoteResult<()>;

    /// Lists the conversation of a project in conversation order.
    async fn fetch_messages(&self, project_id: &str) -> RemoteResult<Vec<Message>>;

    /// Sends a user turn and returns the assistant reply.
    async fn send_message(&self, project_id: &str, text: &str) -> RemoteResult<Message>;
}
