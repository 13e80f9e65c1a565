//! Screen-level error banner state.

use docent_core::{DocentError, ErrorKind};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The error currently shown on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotError {
    pub kind: ErrorKind,
    pub message: String,
}

/// A single optional error message shared by every store of one screen.
///
/// The newest failure replaces whatever was shown before. The slot is cleared
/// only when a later mutation of the same kind succeeds; it never expires.
#[derive(Debug, Clone, Default)]
pub struct ErrorSlot {
    current: Arc<RwLock<Option<SlotError>>>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure, overwriting the previous one.
    pub async fn record(&self, error: &DocentError) {
        let message = match error.remote() {
            Some(remote) => remote.message.clone(),
            None => error.to_string(),
        };
        tracing::debug!("[ErrorSlot] {:?}: {}", error.kind(), message);

        let mut current = self.current.write().await;
        *current = Some(SlotError {
            kind: error.kind(),
            message,
        });
    }

    /// Clears the slot if it currently holds an error of `kind`.
    pub async fn clear_kind(&self, kind: ErrorKind) {
        let mut current = self.current.write().await;
        if current.as_ref().is_some_and(|e| e.kind == kind) {
            *current = None;
        }
    }

    pub async fn get(&self) -> Option<SlotError> {
        self.current.read().await.clone()
    }

    pub async fn message(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|e| e.message.clone())
    }

    pub async fn is_set(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_core::RemoteError;

    #[tokio::test]
    async fn test_newest_error_replaces_previous() {
        let slot = ErrorSlot::new();
        slot.record(&DocentError::Upload(RemoteError::new("first"))).await;
        slot.record(&DocentError::Send(RemoteError::new("second"))).await;

        let current = slot.get().await.unwrap();
        assert_eq!(current.kind, ErrorKind::Send);
        assert_eq!(current.message, "second");
    }

    #[tokio::test]
    async fn test_clear_only_matching_kind() {
        let slot = ErrorSlot::new();
        slot.record(&DocentError::Delete(RemoteError::new("Not found."))).await;

        slot.clear_kind(ErrorKind::Upload).await;
        assert_eq!(slot.message().await.as_deref(), Some("Not found."));

        slot.clear_kind(ErrorKind::Delete).await;
        assert!(!slot.is_set().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let slot = ErrorSlot::new();
        let other = slot.clone();
        slot.record(&DocentError::Fetch(RemoteError::new("offline"))).await;
        assert_eq!(other.message().await.as_deref(), Some("offline"));
    }
}
