//! Screen-level facades.
//!
//! - `project_view`: initial joint load and event handlers of the project screen
//! - `dashboard`: project listing, creation and deletion
//! - `scroll`: follow-the-newest-message tracking

mod dashboard;
mod project_view;
mod scroll;

pub use dashboard::{DashboardStatus, DashboardTile, DashboardView};
pub use project_view::{ChatPanel, ProjectView, ProjectViewStatus};
pub use scroll::ScrollManager;

#[cfg(test)]
#[path = "project_view_test.rs"]
mod project_view_tests;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_tests;
