//! Injectable session state shared by every screen.

use docent_core::auth::{AuthSession, UserIdentity};
use std::sync::Arc;
use tokio::sync::watch;

/// A published session together with the resolution it belongs to.
#[derive(Debug, Clone, Default)]
pub(crate) struct AuthState {
    pub session: AuthSession,
    /// Bumped on every resolution so gates can tell them apart.
    pub generation: u64,
}

/// Process-wide authentication state, injected into each screen.
///
/// The authentication provider calls [`AuthContext::resolve`] once it knows
/// who is signed in. Screens never read a global; they receive a clone of
/// the context and build a [`super::SessionGate`] from it. Tests construct
/// their own context to fake any session.
#[derive(Debug, Clone)]
pub struct AuthContext {
    sender: Arc<watch::Sender<AuthState>>,
}

impl AuthContext {
    /// Creates a context whose session is still unresolved.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(AuthState::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Creates an already-resolved context.
    pub fn resolved(identity: Option<UserIdentity>) -> Self {
        let context = Self::new();
        context.resolve(identity);
        context
    }

    /// Publishes the provider's answer.
    pub fn resolve(&self, identity: Option<UserIdentity>) {
        tracing::debug!(
            "[AuthContext] resolved, signed_in={}",
            identity.is_some()
        );
        self.sender.send_modify(|state| {
            state.session = AuthSession::resolved(identity);
            state.generation += 1;
        });
    }

    /// Returns to the unresolved state, e.g. while a sign-in is re-checked.
    pub fn invalidate(&self) {
        self.sender.send_modify(|state| {
            state.session = AuthSession::pending();
        });
    }

    pub fn current(&self) -> AuthSession {
        self.sender.borrow().session.clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.sender.subscribe()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
