//! Action enum - All possible application actions
//!
//! Components never change view state themselves. They emit Actions in
//! response to events and the App, as the single owner of the current view,
//! applies them.

use crate::model::ReportView;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation intents
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a report page (sidebar selection)
    ShowReport(ReportView),
    /// Advance the import workflow
    WorkflowNext,
    /// Step back in the import workflow
    WorkflowBack,
    /// Switch between the report and import workspaces
    ToggleWorkspace,
    /// Statement file chosen on the upload step
    SelectStatement(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar cursor
    // ─────────────────────────────────────────────────────────────────────────
    SidebarDown,
    SidebarUp,

    // ─────────────────────────────────────────────────────────────────────────
    // Simulation inputs
    // ─────────────────────────────────────────────────────────────────────────
    RaiseReturn,
    LowerReturn,
    ExtendHorizon,
    ShortenHorizon,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::ShowReport(view) => write!(f, "ShowReport({:?})", view),
            Action::WorkflowNext => write!(f, "WorkflowNext"),
            Action::WorkflowBack => write!(f, "WorkflowBack"),
            Action::ToggleWorkspace => write!(f, "ToggleWorkspace"),
            Action::SelectStatement(index) => write!(f, "SelectStatement({})", index),
            Action::SidebarDown => write!(f, "SidebarDown"),
            Action::SidebarUp => write!(f, "SidebarUp"),
            Action::RaiseReturn => write!(f, "RaiseReturn"),
            Action::LowerReturn => write!(f, "LowerReturn"),
            Action::ExtendHorizon => write!(f, "ExtendHorizon"),
            Action::ShortenHorizon => write!(f, "ShortenHorizon"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(
            Action::ShowReport(ReportView::GainsAnalysis).to_string(),
            "ShowReport(GainsAnalysis)"
        );
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
    }
}
