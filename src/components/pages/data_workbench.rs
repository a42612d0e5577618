//! Data Workbench - assets known to the backend

use super::{panel, Page, PageContext};
use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

pub struct DataWorkbenchPage {
    ctx: PageContext,
}

impl DataWorkbenchPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.ctx
            .fixtures
            .assets
            .assets
            .iter()
            .map(|a| Row::new(vec![a.asset_id.clone(), a.asset_name.clone()]))
            .collect()
    }

    fn status_line(&self) -> Line<'static> {
        let assets = &self.ctx.fixtures.assets;
        let mut spans = vec![Span::styled(
            format!("{} assets", assets.count),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(error) = &assets.error {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(spans)
    }
}

impl Component for DataWorkbenchPage {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.status_line()).block(panel("Data Workbench")),
            chunks[0],
        );

        let header = Row::new(vec!["Asset ID", "Name"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(self.rows(), [Constraint::Length(12), Constraint::Min(20)])
            .header(header)
            .block(panel("Assets"));
        frame.render_widget(table, chunks[1]);
        Ok(())
    }
}

impl Page for DataWorkbenchPage {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{empty, render_page, screen_contains, seeded};
    use crate::model::api::AssetsListResponse;
    use crate::model::Fixtures;

    #[test]
    fn test_lists_assets_with_count() {
        let mut page = DataWorkbenchPage::new(seeded());
        assert_eq!(page.rows().len(), 6);
        let screen = render_page(&mut page, 100, 16);
        assert!(screen_contains(&screen, "6 assets"));
        assert!(screen_contains(&screen, "Total Stock Market ETF"));
        assert!(!screen_contains(&screen, "Error:"));
    }

    #[test]
    fn test_shows_backend_error() {
        let fixtures = Fixtures {
            assets: AssetsListResponse {
                assets: Vec::new(),
                count: 0,
                error: Some("database unavailable".to_string()),
            },
            ..Fixtures::default()
        };
        let mut page = DataWorkbenchPage::new(PageContext::new(fixtures, "USD"));
        let screen = render_page(&mut page, 100, 16);
        assert!(screen_contains(&screen, "0 assets"));
        assert!(screen_contains(&screen, "Error: database unavailable"));
    }

    #[test]
    fn test_empty_asset_list() {
        let mut page = DataWorkbenchPage::new(empty());
        assert!(page.rows().is_empty());
        render_page(&mut page, 100, 16);
    }
}
