//! Map Columns - how statement columns land in portfolio fields

use super::{panel, workflow_key, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Row, Table},
    Frame,
};

pub struct MapColumnsPage {
    ctx: PageContext,
}

impl MapColumnsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.ctx
            .fixtures
            .column_mappings
            .iter()
            .map(|m| {
                Row::new(vec![
                    m.source.clone(),
                    format!("→ {}", m.target),
                    m.sample.clone(),
                ])
            })
            .collect()
    }
}

impl Component for MapColumnsPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(workflow_key(key))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let header = Row::new(vec!["Statement column", "Field", "Sample"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(
            self.rows(),
            [
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
            ],
        )
        .header(header)
        .block(panel("Map Columns"));

        frame.render_widget(table, area);
        Ok(())
    }
}

impl Page for MapColumnsPage {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{empty, render_page, screen_contains, seeded};

    #[test]
    fn test_one_row_per_mapping() {
        let mut page = MapColumnsPage::new(seeded());
        assert_eq!(page.rows().len(), 4);
        let screen = render_page(&mut page, 100, 12);
        assert!(screen_contains(&screen, "Trade Date"));
        assert!(screen_contains(&screen, "→ amount"));
    }

    #[test]
    fn test_empty_mapping_renders_header_only() {
        let mut page = MapColumnsPage::new(empty());
        assert!(page.rows().is_empty());
        let screen = render_page(&mut page, 100, 12);
        assert!(screen_contains(&screen, "Statement column"));
    }
}
