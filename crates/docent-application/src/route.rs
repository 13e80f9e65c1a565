//! Route parameter resolution.

use docent_core::route::RouteParams;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;

/// Unwraps the deferred project id of a project-scoped route.
///
/// One resolver belongs to one mount of a screen. Until the navigation
/// future has produced its parameters, [`Self::project_id`] is `None` and
/// every project-scoped fetch is skipped. A remount builds a new resolver,
/// so nothing is cached across mounts.
#[derive(Debug, Default)]
pub struct RouteParamResolver {
    started: AtomicBool,
    project_id: OnceCell<String>,
}

impl RouteParamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Awaits `params` and stores the project id.
    ///
    /// Only the first call awaits its future; later calls drop theirs and
    /// return whatever is known so far.
    pub async fn resolve<F>(&self, params: F) -> Option<String>
    where
        F: Future<Output = RouteParams>,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!("[RouteParamResolver] already resolving, ignoring");
            return self.project_id();
        }

        let RouteParams { id } = params.await;
        tracing::debug!("[RouteParamResolver] project id resolved: {}", id);
        // Cannot already be set: only the first caller reaches this point.
        let _ = self.project_id.set(id);
        self.project_id()
    }

    pub fn project_id(&self) -> Option<String> {
        self.project_id.get().cloned()
    }

    pub fn is_resolved(&self) -> bool {
        self.project_id.initialized()
    }
}
