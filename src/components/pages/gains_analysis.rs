//! Gains Analysis - per asset performance

use super::{gain_color, panel, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{cards_and_body, two_columns};
use crate::components::widgets::{top_right, MetricCard, TooltipEntry, ValueTooltip};
use crate::model::fixtures::AssetPerformance;
use crate::model::money::format_percent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Cell, Row, Table, TableState},
    Frame,
};

pub struct GainsAnalysisPage {
    ctx: PageContext,
    table_state: TableState,
}

impl GainsAnalysisPage {
    pub fn new(ctx: PageContext) -> Self {
        let mut table_state = TableState::default();
        if !ctx.fixtures.performance.is_empty() {
            table_state.select(Some(0));
        }
        Self { ctx, table_state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn total_gain(&self) -> f64 {
        self.ctx.fixtures.performance.iter().map(|p| p.gain()).sum()
    }

    /// Asset with the highest gain percentage
    pub fn best(&self) -> Option<&AssetPerformance> {
        self.ctx
            .fixtures
            .performance
            .iter()
            .max_by(|a, b| a.gain_percent().total_cmp(&b.gain_percent()))
    }

    /// Asset with the lowest gain percentage
    pub fn worst(&self) -> Option<&AssetPerformance> {
        self.ctx
            .fixtures
            .performance
            .iter()
            .min_by(|a, b| a.gain_percent().total_cmp(&b.gain_percent()))
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.ctx
            .fixtures
            .performance
            .iter()
            .map(|p| {
                let color = gain_color(p.gain());
                Row::new(vec![
                    Cell::from(p.symbol.clone()).style(Style::default().fg(Color::White)),
                    Cell::from(p.name.clone()),
                    Cell::from(self.ctx.money(p.cost_basis)),
                    Cell::from(self.ctx.money(p.market_value)),
                    Cell::from(self.ctx.money(p.gain())).style(Style::default().fg(color)),
                    Cell::from(format_percent(p.gain_percent())).style(Style::default().fg(color)),
                ])
            })
            .collect()
    }

    /// Tooltip payload for the selected asset
    pub fn tooltip_payload(&self) -> (String, Vec<TooltipEntry>) {
        self.selected()
            .and_then(|i| self.ctx.fixtures.performance.get(i))
            .map(|p| {
                (
                    p.symbol.clone(),
                    vec![TooltipEntry::new("Gain", p.gain_percent())],
                )
            })
            .unwrap_or_default()
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.ctx.fixtures.performance.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.table_state.select(Some(next));
    }

    fn draw_cards(&self, frame: &mut Frame, areas: &[Rect]) {
        let total = self.total_gain();
        let performer = |p: Option<&AssetPerformance>| {
            p.map(|p| format!("{} {}", p.symbol, format_percent(p.gain_percent())))
                .unwrap_or_else(|| "-".to_string())
        };

        let cards = [
            MetricCard::new("Total Gain", self.ctx.money(total)).accent(gain_color(total)),
            MetricCard::new("Best Performer", performer(self.best())).accent(Color::Green),
            MetricCard::new("Worst Performer", performer(self.worst())).accent(Color::Red),
        ];
        for (card, area) in cards.into_iter().zip(areas) {
            frame.render_widget(card, *area);
        }
    }

    fn draw_chart(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .ctx
            .fixtures
            .performance
            .iter()
            .map(|p| {
                let percent = p.gain_percent();
                Bar::default()
                    .label(Line::from(p.symbol.clone()))
                    .value((percent.abs() * 10.0).round() as u64)
                    .text_value(format_percent(percent))
                    .style(Style::default().fg(gain_color(percent)))
            })
            .collect();

        let chart = BarChart::default()
            .block(panel("Gain %"))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);

        let (label, payload) = self.tooltip_payload();
        let tooltip = ValueTooltip::new(&payload, &self.ctx.currency)
            .label(&label)
            .formatter(|value, _| format_percent(value));
        let size = tooltip.size();
        frame.render_widget(tooltip, top_right(area, size));
    }
}

impl Component for GainsAnalysisPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => self.move_selection(true),
            KeyCode::Char('h') | KeyCode::Left => self.move_selection(false),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, body) = cards_and_body(area, 3, 4);
        self.draw_cards(frame, &cards);

        let (left, right) = two_columns(body, 60);

        let header = Row::new(vec!["Symbol", "Name", "Cost", "Value", "Gain", "Gain %"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            self.rows(),
            [
                Constraint::Length(7),
                Constraint::Min(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(panel("Performance"))
        .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(table, left, &mut self.table_state);

        self.draw_chart(frame, right);
        Ok(())
    }
}

impl Page for GainsAnalysisPage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("h/l", "Asset")]
    }
}
