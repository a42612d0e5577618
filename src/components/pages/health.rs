//! Health - backend status report

use super::{panel, Page, PageContext};
use crate::component::Component;
use crate::model::api::HealthStatus;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct HealthPage {
    ctx: PageContext,
}

impl HealthPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Label/value pairs in display order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let health = &self.ctx.fixtures.health;
        let status = match health.status {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
        };
        vec![
            ("Status", status.to_string()),
            ("App", health.app.clone()),
            ("Version", health.version.clone()),
            ("Environment", health.environment.clone()),
            ("System state", health.system_state.clone()),
            ("Database", health.database.clone()),
            ("Demo mode", if health.demo_mode { "yes" } else { "no" }.to_string()),
            (
                "Checked at",
                health.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
        ]
    }
}

impl Component for HealthPage {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let status_color = match self.ctx.fixtures.health.status {
            HealthStatus::Healthy => Color::Green,
            HealthStatus::Degraded => Color::Yellow,
        };

        let lines: Vec<Line> = self
            .fields()
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let value_style = if i == 0 {
                    Style::default()
                        .fg(status_color)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{:<14}", label), Style::default().fg(Color::Cyan)),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(panel("Health")), area);
        Ok(())
    }
}

impl Page for HealthPage {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pages::test_support::{render_page, screen_contains, seeded};

    #[test]
    fn test_fields() {
        let page = HealthPage::new(seeded());
        let fields = page.fields();
        assert_eq!(fields[0], ("Status", "healthy".to_string()));
        assert!(fields.contains(&("Demo mode", "yes".to_string())));
        assert!(fields.contains(&("Checked at", "2024-06-30 09:00:00 UTC".to_string())));
    }

    #[test]
    fn test_renders_status() {
        let mut page = HealthPage::new(seeded());
        let screen = render_page(&mut page, 80, 14);
        assert!(screen_contains(&screen, "Status        healthy"));
        assert!(screen_contains(&screen, "Environment   demo"));
    }
}
