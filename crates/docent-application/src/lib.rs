//! Application layer for Docent.
//!
//! This crate keeps the client-side state of the workspace consistent with
//! the remote service: per-screen stores for the open project, its documents
//! and its conversation, the session and route gates they wait on, and the
//! screen facades that coordinate them.

pub mod auth;
pub mod document;
pub mod error_slot;
pub mod message;
pub mod project;
pub mod route;
pub mod view;

#[cfg(test)]
mod test_support;

pub use auth::{AuthContext, GateOutcome, SessionGate};
pub use document::DocumentStore;
pub use error_slot::{ErrorSlot, SlotError};
pub use message::{Delivery, MessageStore, SendOutcome, StreamEntry};
pub use project::{ProjectStore, TitleKey};
pub use route::RouteParamResolver;
pub use view::{
    ChatPanel, DashboardStatus, DashboardTile, DashboardView, ProjectView, ProjectViewStatus,
};
