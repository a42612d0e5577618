//! Simulation - compound growth projection of the current net worth

use super::{panel, value_bounds, Page, PageContext};
use crate::action::Action;
use crate::component::Component;
use crate::components::layout::cards_and_body;
use crate::components::widgets::MetricCard;
use crate::model::simulation::{project_growth, total_contributions, SimulationParams};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};
use tracing::debug;

pub struct SimulationPage {
    ctx: PageContext,
    params: SimulationParams,
}

impl SimulationPage {
    pub fn new(ctx: PageContext) -> Self {
        let params = SimulationParams::new(ctx.fixtures.monthly_contribution);
        Self { ctx, params }
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn starting_balance(&self) -> f64 {
        self.ctx.fixtures.current_net_worth().unwrap_or(0.0)
    }

    pub fn projection(&self) -> Vec<(u32, f64)> {
        project_growth(self.starting_balance(), &self.params)
    }

    fn draw_cards(&self, frame: &mut Frame, areas: &[Rect]) {
        let projected = self
            .projection()
            .last()
            .map(|(_, v)| *v)
            .unwrap_or_default();

        let cards = [
            MetricCard::new("Start", self.ctx.money(self.starting_balance())),
            MetricCard::new(
                "Annual Return",
                format!("{:.1}%", self.params.annual_return),
            )
            .accent(Color::Yellow),
            MetricCard::new(
                "Projected",
                self.ctx.money(projected.round()),
            )
            .delta(format!("in {} years", self.params.years), projected >= self.starting_balance())
            .accent(Color::Green),
            MetricCard::new(
                "Contributions",
                self.ctx.money(total_contributions(&self.params)),
            )
            .accent(Color::Magenta),
        ];
        for (card, area) in cards.into_iter().zip(areas) {
            frame.render_widget(card, *area);
        }
    }

    fn draw_projection(&self, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = self
            .projection()
            .into_iter()
            .map(|(year, value)| (f64::from(year), value))
            .collect();
        let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
        let y_bounds = value_bounds(&values);
        let x_max = f64::from(self.params.years);

        let datasets = vec![Dataset::default()
            .name("Projected net worth")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&points)];

        let chart = Chart::new(datasets)
            .block(panel("Projection"))
            .x_axis(
                Axis::default()
                    .title("Years")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(vec![Span::raw("0"), Span::raw(self.params.years.to_string())]),
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
    }
}

impl Component for SimulationPage {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::RaiseReturn),
            KeyCode::Char('-') => Some(Action::LowerReturn),
            KeyCode::Char(']') => Some(Action::ExtendHorizon),
            KeyCode::Char('[') => Some(Action::ShortenHorizon),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::RaiseReturn => self.params.raise_return(),
            Action::LowerReturn => self.params.lower_return(),
            Action::ExtendHorizon => self.params.extend(),
            Action::ShortenHorizon => self.params.shorten(),
            _ => return Ok(None),
        }
        debug!(
            "Simulation params: {:.1}% over {} years",
            self.params.annual_return, self.params.years
        );
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (cards, body) = cards_and_body(area, 4, 4);
        self.draw_cards(frame, &cards);
        self.draw_projection(frame, body);
        Ok(())
    }
}

impl Page for SimulationPage {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("+/-", "Return"), ("[/]", "Years")]
    }
}
