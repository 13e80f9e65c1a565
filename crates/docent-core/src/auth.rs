//! Authentication session model.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// Process-wide authentication state.
///
/// `resolved` turns true once the provider has answered; `identity` is only
/// meaningful after that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub identity: Option<UserIdentity>,
    pub resolved: bool,
}

impl AuthSession {
    /// A session whose provider has not answered yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// A resolved session, signed in or not.
    pub fn resolved(identity: Option<UserIdentity>) -> Self {
        Self {
            identity,
            resolved: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.resolved && self.identity.is_some()
    }
}
