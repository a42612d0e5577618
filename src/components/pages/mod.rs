//! Page components
//!
//! One page per view. Pages read the shared fixture table and emit
//! navigation intents; they never decide which page comes next.

pub mod complete;
pub mod dashboard;
pub mod data_quality;
pub mod data_workbench;
pub mod gains_analysis;
pub mod health;
pub mod map_columns;
pub mod portfolio_overview;
pub mod review;
pub mod simulation;
pub mod upload;

pub use complete::CompletePage;
pub use dashboard::DashboardPage;
pub use data_quality::DataQualityPage;
pub use data_workbench::DataWorkbenchPage;
pub use gains_analysis::GainsAnalysisPage;
pub use health::HealthPage;
pub use map_columns::MapColumnsPage;
pub use portfolio_overview::PortfolioOverviewPage;
pub use review::ReviewPage;
pub use simulation::SimulationPage;
pub use upload::UploadPage;

use crate::action::Action;
use crate::component::Component;
use crate::model::money::{format_compact, format_money};
use crate::model::Fixtures;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use std::rc::Rc;

/// Identifies a page component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Dashboard,
    Upload,
    MapColumns,
    Review,
    Complete,
    PortfolioOverview,
    GainsAnalysis,
    Simulation,
    DataWorkbench,
    DataQuality,
    Health,
}

/// Data and settings shared by every page
#[derive(Debug, Clone)]
pub struct PageContext {
    pub fixtures: Rc<Fixtures>,
    pub currency: String,
}

impl PageContext {
    pub fn new(fixtures: Fixtures, currency: impl Into<String>) -> Self {
        Self {
            fixtures: Rc::new(fixtures),
            currency: currency.into(),
        }
    }

    pub fn money(&self, value: f64) -> String {
        format_money(value, &self.currency)
    }

    pub fn compact(&self, value: f64) -> String {
        format_compact(value, &self.currency)
    }
}

/// A component bound to one view
pub trait Page: Component {
    /// Page specific shortcuts for the help bar
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Keys shared by the pages of the import workflow
pub fn workflow_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Enter | KeyCode::Right => Some(Action::WorkflowNext),
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => Some(Action::WorkflowBack),
        _ => None,
    }
}

/// Standard bordered panel
pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
}

/// Green for gains, red for losses
pub fn gain_color(value: f64) -> Color {
    if value >= 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

/// Axis bounds with a little headroom; never a zero-width range
pub fn value_bounds(values: &[f64]) -> [f64; 2] {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(1.0);
    [min - pad, max + pad]
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    /// Draw a page on a test terminal and return the screen as lines
    pub fn render_page(page: &mut dyn Component, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = Rect::new(0, 0, width, height);
                page.draw(f, area).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    pub fn screen_contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }

    pub fn seeded() -> PageContext {
        PageContext::new(Fixtures::default(), "USD")
    }

    pub fn empty() -> PageContext {
        PageContext::new(Fixtures::empty(), "USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_workflow_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(workflow_key(key(KeyCode::Char('n'))), Some(Action::WorkflowNext));
        assert_eq!(workflow_key(key(KeyCode::Backspace)), Some(Action::WorkflowBack));
        assert_eq!(workflow_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
        assert_eq!(value_bounds(&[5.0]), [4.0, 6.0]);
        assert_eq!(value_bounds(&[0.0, 100.0]), [-10.0, 110.0]);
    }

    #[test]
    fn test_page_context_formats_with_currency() {
        let ctx = PageContext::new(Fixtures::empty(), "CNY");
        assert_eq!(ctx.money(1200.5), "¥1,200.5");
        assert_eq!(ctx.compact(2_400.0), "¥2K");
    }
}
