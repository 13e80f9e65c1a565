//! Project domain module.
//!
//! A project groups uploaded documents with a single conversation.

mod model;

pub use model::{NewProject, Project};
