//! Dashboard - net worth at a glance

use super::{gain_color, panel, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{cards_and_body, two_columns};
use crate::components::widgets::{pad_to, MetricCard};
use crate::model::money::format_percent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Sparkline},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct DashboardPage {
    ctx: PageContext,
}

impl DashboardPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Display width of the widest allocation name
    pub fn name_column_width(&self) -> usize {
        self.ctx
            .fixtures
            .allocation
            .iter()
            .map(|a| a.name.width())
            .max()
            .unwrap_or(0)
    }

    /// One row per allocation entry with its share of the total
    pub fn allocation_items(&self) -> Vec<ListItem<'static>> {
        let fixtures = &self.ctx.fixtures;
        let total = fixtures.allocation_total();
        let name_width = self.name_column_width();

        fixtures
            .allocation
            .iter()
            .map(|entry| {
                let share = if total > 0.0 {
                    entry.value / total * 100.0
                } else {
                    0.0
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        pad_to(&entry.name, name_width + 2),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        pad_to(&self.ctx.money(entry.value), 12),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!("{:>5.1}%", share), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect()
    }

    pub fn activity_items(&self) -> Vec<ListItem<'static>> {
        self.ctx
            .fixtures
            .activity
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.date.format("%b %d")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        pad_to(&entry.description, 18),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        pad_to(&entry.category, 11),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        self.ctx.money(entry.amount),
                        Style::default().fg(gain_color(entry.amount)),
                    ),
                ]))
            })
            .collect()
    }

    fn draw_cards(&self, frame: &mut Frame, areas: &[Rect]) {
        let fixtures = &self.ctx.fixtures;

        let net_worth = fixtures
            .current_net_worth()
            .map(|v| self.ctx.money(v))
            .unwrap_or_else(|| "-".to_string());
        let mut net_worth_card = MetricCard::new("Net Worth", net_worth);
        if let Some(change) = fixtures.month_change() {
            let base = fixtures.current_net_worth().unwrap_or(0.0) - change;
            let percent = if base != 0.0 { change / base * 100.0 } else { 0.0 };
            net_worth_card = net_worth_card.delta(
                format!("{} ({})", self.ctx.money(change.abs()), format_percent(percent)),
                change >= 0.0,
            );
        }

        let invested = fixtures.allocation_total() - fixtures.cash_balance().unwrap_or(0.0);
        let cards = [
            net_worth_card,
            MetricCard::new("Invested", self.ctx.money(invested)).accent(Color::Magenta),
            MetricCard::new(
                "Cash",
                fixtures
                    .cash_balance()
                    .map(|v| self.ctx.money(v))
                    .unwrap_or_else(|| "-".to_string()),
            )
            .accent(Color::Yellow),
        ];

        for (card, area) in cards.into_iter().zip(areas) {
            frame.render_widget(card, *area);
        }
    }

    fn draw_trend(&self, frame: &mut Frame, area: Rect) {
        let fixtures = &self.ctx.fixtures;
        let data: Vec<u64> = fixtures
            .net_worth
            .iter()
            .map(|p| p.value.max(0.0).round() as u64)
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(panel("Net Worth Trend").inner(area));

        frame.render_widget(panel("Net Worth Trend"), area);
        frame.render_widget(
            Sparkline::default()
                .data(&data)
                .style(Style::default().fg(Color::Cyan)),
            chunks[0],
        );

        let months: Vec<&str> = fixtures.net_worth.iter().map(|p| p.month.as_str()).collect();
        frame.render_widget(
            Paragraph::new(months.join(" ")).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}

impl Component for DashboardPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('n') => Some(Action::WorkflowNext),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, body) = cards_and_body(area, 3, 4);
        self.draw_cards(frame, &cards);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);

        self.draw_trend(frame, rows[0]);

        let (left, right) = two_columns(rows[1], 45);
        frame.render_widget(List::new(self.allocation_items()).block(panel("Allocation")), left);
        frame.render_widget(
            List::new(self.activity_items()).block(panel("Recent Activity")),
            right,
        );
        Ok(())
    }
}

impl Page for DashboardPage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("n", "Import")]
    }
}
