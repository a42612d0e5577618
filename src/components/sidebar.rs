//! Sidebar - the report navigation menu
//!
//! Renders every section and item in declaration order and reports the
//! user's choice as `Action::ShowReport`. The item matching the current
//! report view is highlighted; nothing is highlighted when the view has no
//! entry or the import workspace is on screen.

use crate::action::Action;
use crate::component::Component;
use crate::model::navigation::{flatten, highlighted, report_navigation};
use crate::model::{NavItem, NavSection, ReportView};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One rendered row of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Section(&'static str),
    Item(NavItem),
    Spacer,
}

pub struct Sidebar {
    sections: Vec<NavSection>,
    /// Index into the flattened items
    cursor: usize,
    /// Report view to highlight, `None` while importing
    current: Option<ReportView>,
    /// Area of the last draw, for mouse hit testing
    area: Rect,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(report_navigation())
    }
}

impl Sidebar {
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self {
            sections,
            cursor: 0,
            current: None,
            area: Rect::default(),
        }
    }

    /// Update the view to highlight; also moves the cursor onto it
    pub fn set_current(&mut self, current: Option<ReportView>) {
        self.current = current;
        if let Some(view) = current {
            if let Some(idx) = self.items().iter().position(|item| item.view == view) {
                self.cursor = idx;
            }
        }
    }

    pub fn items(&self) -> Vec<NavItem> {
        flatten(&self.sections)
    }

    pub fn cursor_item(&self) -> Option<NavItem> {
        self.items().get(self.cursor).copied()
    }

    /// Rows in render order
    pub fn rows(&self) -> Vec<SidebarRow> {
        let mut rows = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                rows.push(SidebarRow::Spacer);
            }
            rows.push(SidebarRow::Section(section.title));
            rows.extend(section.items.iter().copied().map(SidebarRow::Item));
        }
        rows
    }

    /// Items rendered with the active highlight
    pub fn active_items(&self) -> Vec<NavItem> {
        highlighted(&self.sections, self.current)
    }

    fn move_cursor(&mut self, forward: bool) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    /// Menu item under a terminal cell, if any
    pub fn item_at(&self, column: u16, row: u16) -> Option<NavItem> {
        let inner_top = self.area.y + 1;
        let inside = column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= inner_top
            && row < self.area.y + self.area.height.saturating_sub(1);
        if !inside {
            return None;
        }

        match self.rows().get(usize::from(row - inner_top)) {
            Some(SidebarRow::Item(item)) => Some(*item),
            _ => None,
        }
    }

    fn render_row(&self, row: &SidebarRow) -> ListItem<'static> {
        match row {
            SidebarRow::Spacer => ListItem::new(Line::from("")),
            SidebarRow::Section(title) => ListItem::new(Line::from(Span::styled(
                title.to_uppercase(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ))),
            SidebarRow::Item(item) => {
                let active = item.is_active(self.current);
                let under_cursor = self.cursor_item() == Some(*item);
                let marker = if under_cursor { "›" } else { " " };

                let style = if active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if under_cursor {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {} {} ", item.icon, item.name()), style),
                ]))
            }
        }
    }
}

impl Component for Sidebar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SidebarDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SidebarUp),
            KeyCode::Enter => self.cursor_item().map(|item| Action::ShowReport(item.view)),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                self.items().get(idx).map(|item| Action::ShowReport(item.view))
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .item_at(mouse.column, mouse.row)
            .map(|item| Action::ShowReport(item.view)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SidebarDown => self.move_cursor(true),
            Action::SidebarUp => self.move_cursor(false),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = area;

        let items: Vec<ListItem> = self.rows().iter().map(|row| self.render_row(row)).collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Menu "),
        );

        frame.render_widget(list, area);
        Ok(())
    }
}
