//! Conversation message types.

mod model;

pub use model::{Message, MessageRole};
