//! Navigation surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Unauthenticated landing view.
    Landing,
    /// Project listing.
    Dashboard,
    /// A single project, keyed by id.
    Project(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landing => f.write_str("/"),
            Self::Dashboard => f.write_str("/dashboard"),
            Self::Project(id) => write!(f, "/project/{}", id),
        }
    }
}

/// Parameters carried by a project-scoped route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub id: String,
}

impl RouteParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Performs navigation on behalf of the stores.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
