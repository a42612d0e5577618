//! Small reusable widgets: metric cards and value tooltips

use crate::model::money::format_money;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Turns a value and a currency code into a label
pub type ValueFormatter = fn(f64, &str) -> String;

// ═══════════════════════════════════════════════════════════════════════════════
// Metric Card
// ═══════════════════════════════════════════════════════════════════════════════

/// A bordered card with a title, a headline value and an optional delta
pub struct MetricCard<'a> {
    title: &'a str,
    value: String,
    delta: Option<(String, bool)>,
    accent: Color,
}

impl<'a> MetricCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            delta: None,
            accent: Color::Cyan,
        }
    }

    /// Show a change underneath the value, green when `positive`
    pub fn delta(mut self, label: impl Into<String>, positive: bool) -> Self {
        self.delta = Some((label.into(), positive));
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            self.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];

        if let Some((label, positive)) = self.delta {
            let color = if positive { Color::Green } else { Color::Red };
            let arrow = if positive { "▲" } else { "▼" };
            lines.push(Line::from(Span::styled(
                format!("{} {}", arrow, label),
                Style::default().fg(color),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" {} ", self.title))
                    .title_style(Style::default().fg(self.accent)),
            )
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Value Tooltip
// ═══════════════════════════════════════════════════════════════════════════════

/// One named value shown in a tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: f64,
}

impl TooltipEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Floating label for a chart point
///
/// An empty payload renders nothing.
pub struct ValueTooltip<'a> {
    label: Option<&'a str>,
    payload: &'a [TooltipEntry],
    currency: &'a str,
    formatter: ValueFormatter,
}

impl<'a> ValueTooltip<'a> {
    pub fn new(payload: &'a [TooltipEntry], currency: &'a str) -> Self {
        Self {
            label: None,
            payload,
            currency,
            formatter: format_money,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Text content, one line per entry plus the optional label
    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.payload.is_empty() {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.payload.len() + 1);
        if let Some(label) = self.label {
            lines.push(Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Gray),
            )));
        }
        for entry in self.payload {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", entry.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    (self.formatter)(entry.value, self.currency),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines
    }

    /// Width and height the tooltip needs, borders included
    pub fn size(&self) -> (u16, u16) {
        let lines = self.lines();
        if lines.is_empty() {
            return (0, 0);
        }
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        (width as u16 + 4, lines.len() as u16 + 2)
    }
}

impl Widget for ValueTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        if lines.is_empty() || area.is_empty() {
            return;
        }

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .style(Style::default().bg(Color::Rgb(30, 34, 42)))
            .render(area, buf);
    }
}

/// Place a box of `size` in the top-right corner of `area`, one cell in
pub fn top_right(area: Rect, size: (u16, u16)) -> Rect {
    let width = size.0.min(area.width.saturating_sub(2));
    let height = size.1.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + 1,
        width,
        height,
    )
}

/// Pad `text` on the right to `width` display columns
pub fn pad_to(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::money::format_percent;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_tooltip_empty_payload_renders_nothing() {
        let tooltip = ValueTooltip::new(&[], "USD").label("Jun");
        assert!(tooltip.lines().is_empty());
        assert_eq!(tooltip.size(), (0, 0));

        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        ValueTooltip::new(&[], "USD").render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_tooltip_default_money_formatter() {
        let payload = vec![TooltipEntry::new("Net worth", 1200.5)];
        let tooltip = ValueTooltip::new(&payload, "CNY").label("Jun");
        let lines = tooltip.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].to_string(), "Net worth: ¥1,200.5");
    }

    #[test]
    fn test_tooltip_custom_formatter() {
        let payload = vec![TooltipEntry::new("Gain", 12.34)];
        let tooltip = ValueTooltip::new(&payload, "USD").formatter(|v, _| format_percent(v));
        assert_eq!(tooltip.lines()[0].to_string(), "Gain: +12.3%");
    }

    #[test]
    fn test_metric_card_renders_value_and_delta() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        MetricCard::new("Net Worth", "$131,200")
            .delta("$3,250", true)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Net Worth"));
        assert!(text.contains("$131,200"));
        assert!(text.contains("▲ $3,250"));
    }

    #[test]
    fn test_top_right_stays_inside() {
        let area = Rect::new(10, 5, 40, 12);
        let rect = top_right(area, (12, 4));
        assert_eq!(rect, Rect::new(37, 6, 12, 4));

        let tiny = top_right(Rect::new(0, 0, 5, 3), (12, 4));
        assert!(tiny.width <= 3 && tiny.height <= 1);
    }

    #[test]
    fn test_pad_to_counts_display_width() {
        assert_eq!(pad_to("¥5", 4), "¥5  ");
        assert_eq!(pad_to("longer", 3), "longer");
    }
}
