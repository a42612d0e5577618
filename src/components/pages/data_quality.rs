//! Data Quality - results of the backend's consistency checks

use super::{panel, Page, PageContext};
use crate::component::Component;
use crate::components::layout::cards_and_body;
use crate::components::widgets::MetricCard;
use crate::model::api::{CheckStatus, QualityCheck};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

const STATUSES: [CheckStatus; 3] = [CheckStatus::Pass, CheckStatus::Warning, CheckStatus::Fail];

fn status_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Pass => Color::Green,
        CheckStatus::Warning => Color::Yellow,
        CheckStatus::Fail => Color::Red,
    }
}

pub struct DataQualityPage {
    ctx: PageContext,
}

impl DataQualityPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    pub fn check_items(&self) -> Vec<ListItem<'static>> {
        self.ctx
            .fixtures
            .data_quality
            .checks
            .iter()
            .map(check_item)
            .collect()
    }
}

fn check_item(check: &QualityCheck) -> ListItem<'static> {
    let color = status_color(check.status);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", check.status.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            check.check_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", check.status.label()),
            Style::default().fg(color),
        ),
    ])];
    lines.push(Line::from(Span::styled(
        format!("  {}", check.message),
        Style::default().fg(Color::Gray),
    )));
    if let Some(details) = &check.details {
        lines.push(Line::from(Span::styled(
            format!("  {}", details),
            Style::default().fg(Color::DarkGray),
        )));
    }
    ListItem::new(lines)
}

impl Component for DataQualityPage {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let quality = &self.ctx.fixtures.data_quality;
        let (cards, body) = cards_and_body(area, STATUSES.len(), 3);

        for (status, card_area) in STATUSES.iter().zip(&cards) {
            let title = match status {
                CheckStatus::Pass => "Passed",
                CheckStatus::Warning => "Warnings",
                CheckStatus::Fail => "Failed",
            };
            frame.render_widget(
                MetricCard::new(title, quality.count(*status).to_string())
                    .accent(status_color(*status)),
                *card_area,
            );
        }

        frame.render_widget(List::new(self.check_items()).block(panel("Checks")), body);
        Ok(())
    }
}

impl Page for DataQualityPage {}
