//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod pages;
pub mod quit_dialog;
pub mod sidebar;
pub mod widgets;

pub use header::{render_header, render_help_bar, HeaderContext};
pub use help_dialog::HelpDialog;
pub use layout::calculate_shell_layout;
pub use quit_dialog::QuitDialog;
pub use sidebar::Sidebar;
