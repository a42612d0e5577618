//! Model layer - view state, navigation and fixture data
//!
//! - `view` - the two view enumerations and the current-view cell
//! - `navigation` - sidebar menu entries
//! - `fixtures` - the read-only data pages render
//! - `api` - backend response shapes carried by the fixtures
//! - `money` - currency and number formatting
//! - `simulation` - growth projection
//! - `modal` - overlay stack

pub mod api;
pub mod fixtures;
pub mod modal;
pub mod money;
pub mod navigation;
pub mod simulation;
pub mod view;

// Re-export commonly used types
pub use fixtures::Fixtures;
pub use navigation::{NavItem, NavSection};
pub use view::{ReportView, View, ViewCell, WorkflowStep, Workspace};
