//! Documents of the open project.

mod store;

pub use store::DocumentStore;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
