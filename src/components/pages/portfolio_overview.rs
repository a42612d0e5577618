//! Portfolio Overview - allocation and value trend from the overview response

use super::{panel, value_bounds, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{cards_and_body, two_columns};
use crate::components::widgets::{top_right, MetricCard, TooltipEntry, ValueTooltip};
use crate::model::money::currency_symbol;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, BarChart, Chart, Dataset, GraphType},
    Frame,
};

pub struct PortfolioOverviewPage {
    ctx: PageContext,
    /// Trend point under the cursor
    point: usize,
}

impl PortfolioOverviewPage {
    pub fn new(ctx: PageContext) -> Self {
        let point = ctx.fixtures.portfolio_overview.trend.points().len().saturating_sub(1);
        Self { ctx, point }
    }

    pub fn point(&self) -> usize {
        self.point
    }

    /// Allocation bars in thousands of the portfolio currency
    pub fn allocation_bars(&self) -> Vec<(String, u64)> {
        self.ctx
            .fixtures
            .portfolio_overview
            .allocation
            .iter()
            .map(|(name, value)| (name.clone(), (value / 1_000.0).max(0.0).round() as u64))
            .collect()
    }

    /// Tooltip payload for the point under the cursor
    pub fn tooltip_payload(&self) -> (String, Vec<TooltipEntry>) {
        let trend = &self.ctx.fixtures.portfolio_overview.trend;
        match (trend.dates.get(self.point), trend.values.get(self.point)) {
            (Some(date), Some(value)) => (date.clone(), vec![TooltipEntry::new("Value", *value)]),
            _ => (String::new(), Vec::new()),
        }
    }

    fn move_point(&mut self, forward: bool) {
        let len = self.ctx.fixtures.portfolio_overview.trend.points().len();
        if len == 0 {
            return;
        }
        self.point = if forward {
            (self.point + 1).min(len - 1)
        } else {
            self.point.saturating_sub(1)
        };
    }

    fn draw_cards(&self, frame: &mut Frame, areas: &[Rect]) {
        let overview = &self.ctx.fixtures.portfolio_overview;
        let cards = [
            MetricCard::new("Total Value", self.ctx.money(overview.total_value)),
            MetricCard::new("Holdings", overview.holdings_count.to_string()).accent(Color::Magenta),
            MetricCard::new(
                "Generated",
                overview.generated_at.format("%Y-%m-%d %H:%M").to_string(),
            )
            .accent(Color::DarkGray),
        ];
        for (card, area) in cards.into_iter().zip(areas) {
            frame.render_widget(card, *area);
        }
    }

    fn draw_allocation(&self, frame: &mut Frame, area: Rect) {
        let bars = self.allocation_bars();
        let data: Vec<(&str, u64)> = bars.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        let title = format!("Allocation ({}K)", currency_symbol(&self.ctx.currency));

        let chart = BarChart::default()
            .block(panel(&title))
            .data(data.as_slice())
            .bar_width(7)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, area);
    }

    fn draw_trend(&self, frame: &mut Frame, area: Rect) {
        let trend = &self.ctx.fixtures.portfolio_overview.trend;
        let points = trend.points();
        let block = panel("Value Trend");

        if points.is_empty() {
            frame.render_widget(block, area);
            return;
        }

        let cursor: Vec<(f64, f64)> = points.get(self.point).copied().into_iter().collect();
        let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
        let y_bounds = value_bounds(&values);
        let x_max = (points.len().saturating_sub(1)).max(1) as f64;

        let datasets = vec![
            Dataset::default()
                .name(trend_name(&self.ctx.fixtures.portfolio_overview.currency))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&points),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Yellow))
                .data(&cursor),
        ];

        let first = trend.dates.first().cloned().unwrap_or_default();
        let last = trend.dates.last().cloned().unwrap_or_default();

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(vec![Span::raw(first), Span::raw(last)]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds(y_bounds)
                    .labels(vec![
                        Span::raw(self.ctx.compact(y_bounds[0])),
                        Span::raw(self.ctx.compact(y_bounds[1])),
                    ]),
            );
        frame.render_widget(chart, area);

        let (label, payload) = self.tooltip_payload();
        let tooltip = ValueTooltip::new(&payload, &self.ctx.currency).label(&label);
        let size = tooltip.size();
        frame.render_widget(tooltip, top_right(area, size));
    }
}

fn trend_name(currency: &str) -> String {
    format!("Value ({})", currency)
}

impl Component for PortfolioOverviewPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => self.move_point(true),
            KeyCode::Char('h') | KeyCode::Left => self.move_point(false),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, body) = cards_and_body(area, 3, 4);
        self.draw_cards(frame, &cards);

        let (left, right) = two_columns(body, 45);
        self.draw_allocation(frame, left);
        self.draw_trend(frame, right);
        Ok(())
    }
}

impl Page for PortfolioOverviewPage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("h/l", "Point")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{empty, render_page, screen_contains, seeded};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_starts_on_latest_point() {
        let mut page = PortfolioOverviewPage::new(seeded());
        assert_eq!(page.point(), 5);

        let (label, payload) = page.tooltip_payload();
        assert_eq!(label, "2024-Jun");
        assert_eq!(payload, vec![TooltipEntry::new("Value", 131_200.0)]);

        page.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(page.point(), 5);
        page.handle_key_event(key(KeyCode::Char('h'))).unwrap();
        assert_eq!(page.point(), 4);
    }

    #[test]
    fn test_renders_cards_and_tooltip() {
        let mut page = PortfolioOverviewPage::new(seeded());
        let screen = render_page(&mut page, 140, 30);
        assert!(screen_contains(&screen, "Total Value"));
        assert!(screen_contains(&screen, "$131,200"));
        assert!(screen_contains(&screen, "Value: $131,200"));
    }

    #[test]
    fn test_allocation_bars_in_thousands() {
        let page = PortfolioOverviewPage::new(seeded());
        let bars = page.allocation_bars();
        assert_eq!(bars.len(), 5);
        assert!(bars.contains(&("Equities".to_string(), 73)));
    }

    #[test]
    fn test_empty_overview() {
        let mut page = PortfolioOverviewPage::new(empty());
        assert!(page.allocation_bars().is_empty());
        let (_, payload) = page.tooltip_payload();
        assert!(payload.is_empty());
        page.handle_key_event(key(KeyCode::Left)).unwrap();
        render_page(&mut page, 140, 30);
    }
}
