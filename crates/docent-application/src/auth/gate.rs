//! Per-screen guard that holds fetches until the session is known.

use super::context::{AuthContext, AuthState};
use docent_core::auth::{AuthSession, UserIdentity};
use docent_core::route::{Navigator, Route};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// How a screen's session wait ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// A user is signed in; project-scoped fetches may start.
    Authenticated(UserIdentity),
    /// Nobody is signed in; the gate has routed to the landing view.
    Redirected,
}

/// Guards a screen until the authentication session is resolved.
///
/// While unresolved, dependents show a loading indication and fetch nothing.
/// Once resolved without an identity the gate navigates to the landing view,
/// at most once per resolution.
pub struct SessionGate {
    receiver: watch::Receiver<AuthState>,
    navigator: Arc<dyn Navigator>,
    redirected_generation: Mutex<Option<u64>>,
}

impl SessionGate {
    pub fn new(context: &AuthContext, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            receiver: context.subscribe(),
            navigator,
            redirected_generation: Mutex::new(None),
        }
    }

    /// Snapshot of the session as currently published.
    pub fn session(&self) -> AuthSession {
        self.receiver.borrow().session.clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.receiver.borrow().session.resolved
    }

    /// Waits for resolution and reports whether the screen may proceed.
    ///
    /// If the provider goes away before answering, the session is treated as
    /// signed out.
    pub async fn settle(&self) -> GateOutcome {
        let mut receiver = self.receiver.clone();
        let resolved = receiver
            .wait_for(|state| state.session.resolved)
            .await
            .map(|state| state.clone());
        let state = match resolved {
            Ok(state) => state,
            Err(_) => {
                tracing::warn!("[SessionGate] auth provider dropped before resolving");
                let mut state = receiver.borrow().clone();
                state.session = AuthSession::resolved(None);
                state
            }
        };

        match state.session.identity {
            Some(identity) => GateOutcome::Authenticated(identity),
            None => {
                self.redirect_once(state.generation);
                GateOutcome::Redirected
            }
        }
    }

    fn redirect_once(&self, generation: u64) {
        let mut last = match self.redirected_generation.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *last == Some(generation) {
            return;
        }
        *last = Some(generation);
        drop(last);

        tracing::info!("[SessionGate] no signed-in user, redirecting to landing");
        self.navigator.navigate(Route::Landing);
    }
}
