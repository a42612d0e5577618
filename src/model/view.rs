//! View enumerations - the closed sets of pages the app can show
//!
//! There are two independent navigation spaces: the report views reachable
//! from the sidebar, and the linear import workflow. Both share the
//! `View` trait so the current-view cell can hold either.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Common behaviour of a closed view enumeration
pub trait View: Copy + Eq + Debug + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// The landing view when nothing else is configured
    const DEFAULT: Self;

    /// Human readable label, also used as the navigation identity
    fn label(&self) -> &'static str;
}

/// Steps of the statement import workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStep {
    Dashboard,
    Upload,
    Map,
    Review,
    Complete,
}

impl View for WorkflowStep {
    const ALL: &'static [Self] = &[
        WorkflowStep::Dashboard,
        WorkflowStep::Upload,
        WorkflowStep::Map,
        WorkflowStep::Review,
        WorkflowStep::Complete,
    ];

    const DEFAULT: Self = WorkflowStep::Dashboard;

    fn label(&self) -> &'static str {
        match self {
            WorkflowStep::Dashboard => "Dashboard",
            WorkflowStep::Upload => "Upload",
            WorkflowStep::Map => "Map Columns",
            WorkflowStep::Review => "Review",
            WorkflowStep::Complete => "Complete",
        }
    }
}

/// Report pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportView {
    Dashboard,
    DataWorkbench,
    PortfolioOverview,
    GainsAnalysis,
    Simulation,
    DataQuality,
    Health,
}

impl View for ReportView {
    const ALL: &'static [Self] = &[
        ReportView::Dashboard,
        ReportView::DataWorkbench,
        ReportView::PortfolioOverview,
        ReportView::GainsAnalysis,
        ReportView::Simulation,
        ReportView::DataQuality,
        ReportView::Health,
    ];

    const DEFAULT: Self = ReportView::Dashboard;

    fn label(&self) -> &'static str {
        match self {
            ReportView::Dashboard => "Dashboard",
            ReportView::DataWorkbench => "Data Workbench",
            ReportView::PortfolioOverview => "Portfolio Overview",
            ReportView::GainsAnalysis => "Gains Analysis",
            ReportView::Simulation => "Simulation",
            ReportView::DataQuality => "Data Quality",
            ReportView::Health => "System Health",
        }
    }
}

/// Which navigation space is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workspace {
    #[default]
    Reports,
    Import,
}

impl Workspace {
    pub fn name(&self) -> &'static str {
        match self {
            Workspace::Reports => "Reports",
            Workspace::Import => "Import",
        }
    }

    pub fn toggled(self) -> Workspace {
        match self {
            Workspace::Reports => Workspace::Import,
            Workspace::Import => Workspace::Reports,
        }
    }
}

/// Single owner cell for the current view of one navigation space
///
/// Never empty: it starts at a landing view and only changes through
/// `set_view`, which accepts any member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCell<V: View> {
    current: V,
}

impl<V: View> Default for ViewCell<V> {
    fn default() -> Self {
        Self::new(V::DEFAULT)
    }
}

impl<V: View> ViewCell<V> {
    pub fn new(landing: V) -> Self {
        Self { current: landing }
    }

    pub fn current(&self) -> V {
        self.current
    }

    /// Replace the current view, returning the previous one
    pub fn set_view(&mut self, next: V) -> V {
        std::mem::replace(&mut self.current, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cell_starts_at_default() {
        let cell: ViewCell<WorkflowStep> = ViewCell::default();
        assert_eq!(cell.current(), WorkflowStep::Dashboard);

        let cell: ViewCell<ReportView> = ViewCell::default();
        assert_eq!(cell.current(), ReportView::Dashboard);
    }

    #[test]
    fn test_set_view_accepts_every_member() {
        let mut cell: ViewCell<ReportView> = ViewCell::default();
        for view in ReportView::ALL {
            cell.set_view(*view);
            assert_eq!(cell.current(), *view);
        }

        let mut cell: ViewCell<WorkflowStep> = ViewCell::default();
        for step in WorkflowStep::ALL {
            let previous = cell.current();
            assert_eq!(cell.set_view(*step), previous);
            assert_eq!(cell.current(), *step);
        }
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&ReportView::PortfolioOverview).unwrap();
        assert_eq!(json, "\"PORTFOLIO_OVERVIEW\"");

        let view: ReportView = serde_json::from_str("\"DATA_WORKBENCH\"").unwrap();
        assert_eq!(view, ReportView::DataWorkbench);

        let step: WorkflowStep = serde_json::from_str("\"REVIEW\"").unwrap();
        assert_eq!(step, WorkflowStep::Review);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = ReportView::ALL.iter().map(|v| v.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ReportView::ALL.len());
    }

    #[test]
    fn test_workspace_toggle() {
        assert_eq!(Workspace::Reports.toggled(), Workspace::Import);
        assert_eq!(Workspace::Import.toggled(), Workspace::Reports);
    }
}
