//! Conversation of the open project.
//!
//! - `entry`: stream entries tagged with their delivery state
//! - `store`: load and optimistic send (`MessageStore`)

mod entry;
mod store;

pub use entry::{Delivery, StreamEntry};
pub use store::{MessageStore, SendOutcome};

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
