use crate::error_slot::ErrorSlot;
use docent_core::config::DocumentSettings;
use docent_core::document::{Document, UploadFile};
use docent_core::service::WorkspaceService;
use docent_core::{DocentError, ErrorKind, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct DocumentState {
    /// Newest first.
    documents: Vec<Document>,
    /// Ids whose deletion the server confirmed while this store was alive.
    deleted: HashSet<String>,
    /// Uploads the server confirmed while this store was alive, newest first.
    uploaded: Vec<Document>,
}

impl DocumentState {
    fn confirm_upload(&mut self, document: Document) {
        if self.deleted.contains(&document.id) {
            return;
        }
        self.uploaded.retain(|d| d.id != document.id);
        self.uploaded.insert(0, document.clone());
        self.documents.retain(|d| d.id != document.id);
        self.documents.insert(0, document);
    }

    /// Replaces the list with a server listing.
    ///
    /// The listing may predate mutations confirmed since it was requested:
    /// confirmed uploads it lacks go in front, confirmed deletions stay out.
    fn apply_listing(&mut self, fetched: Vec<Document>) -> Vec<Document> {
        let missing = self
            .uploaded
            .iter()
            .filter(|u| !self.deleted.contains(&u.id) && !fetched.iter().any(|d| d.id == u.id))
            .cloned();
        let listed = fetched
            .iter()
            .filter(|d| !self.deleted.contains(&d.id))
            .cloned();
        self.documents = missing.chain(listed).collect();
        self.documents.clone()
    }
}

/// Ordered documents of one project.
///
/// Upload and delete are pessimistic: the local sequence changes only after
/// the server confirmed. Both address entries by id and never hold the lock
/// across the remote call, so they may interleave freely with each other and
/// with a load. The displayed set is always the confirmed uploads and listed
/// documents minus the confirmed deletions.
pub struct DocumentStore {
    service: Arc<dyn WorkspaceService>,
    errors: ErrorSlot,
    settings: DocumentSettings,
    state: RwLock<DocumentState>,
}

impl DocumentStore {
    pub fn new(
        service: Arc<dyn WorkspaceService>,
        errors: ErrorSlot,
        settings: DocumentSettings,
    ) -> Self {
        Self {
            service,
            errors,
            settings,
            state: RwLock::new(DocumentState::default()),
        }
    }

    pub async fn load(&self, project_id: &str) -> Result<Vec<Document>> {
        tracing::debug!("[DocumentStore] load() project_id={}", project_id);
        match self.service.fetch_documents(project_id).await {
            Ok(documents) => {
                let visible = self.state.write().await.apply_listing(documents);
                tracing::debug!("[DocumentStore] showing {} documents", visible.len());
                Ok(visible)
            }
            Err(e) => {
                tracing::warn!("[DocumentStore] load failed: {}", e);
                let err = DocentError::Fetch(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    /// Rejects files the upload control would not offer.
    pub fn validate(&self, file: &UploadFile) -> Result<()> {
        if file.name.trim().is_empty() {
            return Err(DocentError::validation("No file selected"));
        }
        match file.extension() {
            Some(ext) if self.settings.accepts(&ext) => Ok(()),
            _ => Err(DocentError::validation(format!(
                "Unsupported file type: {}",
                file.name
            ))),
        }
    }

    /// Uploads a file and prepends the server's document on success.
    pub async fn upload(&self, project_id: &str, file: UploadFile) -> Result<Document> {
        self.validate(&file)?;

        tracing::debug!(
            "[DocumentStore] upload() project_id={}, name={}, bytes={}",
            project_id,
            file.name,
            file.bytes.len()
        );
        match self.service.upload_document(project_id, &file).await {
            Ok(document) => {
                self.state.write().await.confirm_upload(document.clone());
                self.errors.clear_kind(ErrorKind::Upload).await;
                Ok(document)
            }
            Err(e) => {
                tracing::warn!("[DocumentStore] upload of {} failed: {}", file.name, e);
                let err = DocentError::Upload(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    /// Deletes a document; the local entry goes away only after the server
    /// confirmed.
    pub async fn delete(&self, project_id: &str, document_id: &str) -> Result<()> {
        tracing::debug!(
            "[DocumentStore] delete() project_id={}, document_id={}",
            project_id,
            document_id
        );
        match self.service.delete_document(project_id, document_id).await {
            Ok(()) => {
                {
                    let mut state = self.state.write().await;
                    state.deleted.insert(document_id.to_string());
                    state.documents.retain(|d| d.id != document_id);
                    state.uploaded.retain(|d| d.id != document_id);
                }
                self.errors.clear_kind(ErrorKind::Delete).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("[DocumentStore] delete of {} failed: {}", document_id, e);
                let err = DocentError::Delete(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.state.read().await.documents.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.documents.is_empty()
    }
}
