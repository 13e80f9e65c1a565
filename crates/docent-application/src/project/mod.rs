//! Open-project metadata and title editing.

mod store;

pub use store::{ProjectStore, TitleKey};

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
