//! Review - preview of the rows about to be imported

use super::{gain_color, panel, workflow_key, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

pub struct ReviewPage {
    ctx: PageContext,
}

impl ReviewPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.ctx
            .fixtures
            .import_rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.date.format("%Y-%m-%d").to_string()),
                    Cell::from(row.description.clone()),
                    Cell::from(self.ctx.money(row.amount))
                        .style(Style::default().fg(gain_color(row.amount))),
                ])
            })
            .collect()
    }
}

impl Component for ReviewPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(workflow_key(key))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        let header = Row::new(vec!["Date", "Description", "Amount"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            self.rows(),
            [
                Constraint::Length(12),
                Constraint::Min(20),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .block(panel("Review Import"));
        frame.render_widget(table, chunks[0]);

        let fixtures = &self.ctx.fixtures;
        let total = fixtures.import_total();
        let summary = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} rows  ", fixtures.import_rows.len())),
            Span::styled(
                format!("Net {}", self.ctx.money(total)),
                Style::default()
                    .fg(gain_color(total))
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(panel("Summary"));
        frame.render_widget(summary, chunks[1]);
        Ok(())
    }
}

impl Page for ReviewPage {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{empty, render_page, screen_contains, seeded};

    #[test]
    fn test_preview_and_total() {
        let mut page = ReviewPage::new(seeded());
        assert_eq!(page.rows().len(), 4);

        let screen = render_page(&mut page, 100, 14);
        assert!(screen_contains(&screen, "2024-06-28"));
        assert!(screen_contains(&screen, "4 rows"));
        assert!(screen_contains(&screen, "Net $1,898.6"));
    }

    #[test]
    fn test_empty_preview() {
        let mut page = ReviewPage::new(empty());
        assert!(page.rows().is_empty());
        let screen = render_page(&mut page, 100, 14);
        assert!(screen_contains(&screen, "0 rows"));
    }
}
