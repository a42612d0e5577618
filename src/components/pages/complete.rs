//! Complete - import summary

use super::{panel, workflow_key, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct CompletePage {
    ctx: PageContext,
    /// Index of the imported statement file
    source: usize,
}

impl CompletePage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, source: 0 }
    }

    pub fn set_source(&mut self, index: usize) {
        self.source = index;
    }

    pub fn summary(&self) -> String {
        let fixtures = &self.ctx.fixtures;
        let source = fixtures
            .statement_files
            .get(self.source)
            .map(|f| format!(" from {}", f.file_name))
            .unwrap_or_default();
        format!(
            "Imported {} transactions ({}){}",
            fixtures.import_rows.len(),
            self.ctx.money(fixtures.import_total()),
            source
        )
    }
}

impl Component for CompletePage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(workflow_key(key))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓ Import complete",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.summary()),
            Line::from(""),
            Line::from(Span::styled(
                "Press n to return to the dashboard",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let popup = centered_popup(area, 70, 9);
        frame.render_widget(
            Paragraph::new(content)
                .alignment(Alignment::Center)
                .block(panel("Complete")),
            popup,
        );
        Ok(())
    }
}

impl Page for CompletePage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("n", "Finish")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{empty, render_page, screen_contains, seeded};

    #[test]
    fn test_summary() {
        let page = CompletePage::new(seeded());
        assert_eq!(
            page.summary(),
            "Imported 4 transactions ($1,898.6) from brokerage_2024_06.csv"
        );
        assert_eq!(
            CompletePage::new(empty()).summary(),
            "Imported 0 transactions ($0)"
        );
    }

    #[test]
    fn test_summary_names_chosen_file() {
        let mut page = CompletePage::new(seeded());
        page.set_source(1);
        assert!(page.summary().ends_with("from checking_2024_06.csv"));

        page.set_source(9);
        assert_eq!(page.summary(), "Imported 4 transactions ($1,898.6)");
    }

    #[test]
    fn test_renders_centered_message() {
        let mut page = CompletePage::new(seeded());
        let screen = render_page(&mut page, 100, 20);
        assert!(screen_contains(&screen, "Import complete"));
    }
}
