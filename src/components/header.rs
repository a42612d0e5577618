//! Header and help bar

use crate::model::{View, WorkflowStep, Workspace};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

/// What the header shows about the current screen
pub struct HeaderContext<'a> {
    pub workspace: Workspace,
    /// Label of the active view
    pub title: &'a str,
    /// Current step while importing, for the progress trail
    pub step: Option<WorkflowStep>,
    pub currency: &'a str,
}

/// Import progress as `Upload › Map Columns › ...` with the current step marked
pub fn workflow_trail(current: WorkflowStep) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, step) in WorkflowStep::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(step.label(), style));
    }
    Line::from(spans)
}

pub fn render_header(frame: &mut Frame, area: Rect, ctx: &HeaderContext) {
    let mut spans = vec![
        Span::styled(
            " folio ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", ctx.workspace.name()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    match ctx.step {
        Some(step) => spans.extend(workflow_trail(step).spans),
        None => spans.push(Span::styled(
            ctx.title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(
                Title::from(Span::styled(
                    format!(" {} ", ctx.currency),
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Right),
            ),
    );

    frame.render_widget(header, area);
}

fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Bottom line with the shortcuts of the current screen
pub fn render_help_bar(frame: &mut Frame, area: Rect, workspace: Workspace, page_hints: &[(&str, &str)]) {
    let mut spans = vec![key_hint("q", Color::Yellow), Span::raw("Quit ")];

    match workspace {
        Workspace::Reports => {
            spans.push(key_hint("j/k", Color::Cyan));
            spans.push(Span::raw("Menu "));
            spans.push(key_hint("Enter", Color::Green));
            spans.push(Span::raw("Open "));
        }
        Workspace::Import => {
            spans.push(key_hint("n", Color::Green));
            spans.push(Span::raw("Next "));
            spans.push(key_hint("b", Color::Cyan));
            spans.push(Span::raw("Back "));
        }
    }

    for (key, label) in page_hints {
        spans.push(key_hint(key, Color::Magenta));
        spans.push(Span::raw(format!("{} ", label)));
    }

    spans.push(key_hint("w", Color::White));
    spans.push(Span::raw("Workspace "));
    spans.push(key_hint("?", Color::White));
    spans.push(Span::raw("Help"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_trail_marks_current_step_only() {
        let trail = workflow_trail(WorkflowStep::Map);
        let marked: Vec<String> = trail
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Green))
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(marked, vec!["Map Columns".to_string()]);
        assert!(trail.to_string().starts_with("Dashboard › Upload › Map Columns"));
    }

    #[test]
    fn test_header_shows_title_and_currency() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_header(
                    f,
                    area,
                    &HeaderContext {
                        workspace: Workspace::Reports,
                        title: "Gains Analysis",
                        step: None,
                        currency: "CNY",
                    },
                );
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Gains Analysis"));
        assert!(text.contains("CNY"));
        assert!(text.contains("Reports"));
    }
}
