//! Sidebar navigation model
//!
//! Menu entries are declared once and never sorted; the sidebar renders
//! them in this order.

use super::view::{ReportView, View};

/// A single menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ReportView,
    pub icon: &'static str,
}

impl NavItem {
    pub const fn new(view: ReportView, icon: &'static str) -> Self {
        Self { view, icon }
    }

    pub fn name(&self) -> &'static str {
        self.view.label()
    }

    /// Whether this entry is the active one for the given view
    pub fn is_active(&self, current: Option<ReportView>) -> bool {
        current == Some(self.view)
    }
}

/// A titled group of menu entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

/// The report navigation menu
///
/// `ReportView::Health` is reachable by its own key and has no entry here.
pub fn report_navigation() -> Vec<NavSection> {
    vec![
        NavSection {
            title: "Overview",
            items: vec![
                NavItem::new(ReportView::Dashboard, "◆"),
                NavItem::new(ReportView::PortfolioOverview, "◉"),
            ],
        },
        NavSection {
            title: "Analysis",
            items: vec![
                NavItem::new(ReportView::GainsAnalysis, "▲"),
                NavItem::new(ReportView::Simulation, "∿"),
            ],
        },
        NavSection {
            title: "Data",
            items: vec![
                NavItem::new(ReportView::DataWorkbench, "▤"),
                NavItem::new(ReportView::DataQuality, "✓"),
            ],
        },
    ]
}

/// Flatten sections into their items, keeping declaration order
pub fn flatten(sections: &[NavSection]) -> Vec<NavItem> {
    sections.iter().flat_map(|s| s.items.iter().copied()).collect()
}

/// Items that should be highlighted for the current view
pub fn highlighted(sections: &[NavSection], current: Option<ReportView>) -> Vec<NavItem> {
    flatten(sections)
        .into_iter()
        .filter(|item| item.is_active(current))
        .collect()
}
