//! Upload - pick a statement file to import

use super::{panel, workflow_key, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub struct UploadPage {
    ctx: PageContext,
    list_state: ListState,
}

impl UploadPage {
    pub fn new(ctx: PageContext) -> Self {
        let mut list_state = ListState::default();
        if !ctx.fixtures.statement_files.is_empty() {
            list_state.select(Some(0));
        }
        Self { ctx, list_state }
    }

    pub fn file_items(&self) -> Vec<ListItem<'static>> {
        self.ctx
            .fixtures
            .statement_files
            .iter()
            .map(|file| {
                ListItem::new(Line::from(vec![
                    Span::styled(file.file_name.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {} · {} KB", file.institution, file.size_kb),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move the cursor and report the file now selected
    fn move_selection(&mut self, forward: bool) -> Option<Action> {
        let len = self.ctx.fixtures.statement_files.len();
        if len == 0 {
            return None;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.list_state.select(Some(next));
        Some(Action::SelectStatement(next))
    }
}

impl Component for UploadPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Ok(self.move_selection(true)),
            KeyCode::Char('k') | KeyCode::Up => Ok(self.move_selection(false)),
            _ => Ok(workflow_key(key)),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                "Import a statement",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Choose an exported CSV from your bank or broker, then press n to map its columns.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(panel("Upload"));
        frame.render_widget(intro, chunks[0]);

        let list = List::new(self.file_items())
            .block(panel("Statement Files"))
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
        Ok(())
    }
}

impl Page for UploadPage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("j/k", "Select")]
    }
}
