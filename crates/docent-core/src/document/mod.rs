//! Document domain module.

mod model;

pub use model::{Document, DocumentStatus, UploadFile};
