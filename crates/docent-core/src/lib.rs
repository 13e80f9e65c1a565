//! Domain layer for Docent.
//!
//! Holds the data model shared by every screen, the error taxonomy, and the
//! contracts the client requires from its collaborators (remote workspace
//! service, navigation).

pub mod auth;
pub mod config;
pub mod document;
pub mod error;
pub mod message;
pub mod project;
pub mod route;
pub mod service;

// Re-export common error type
pub use error::{DocentError, ErrorKind, RemoteError, Result};
