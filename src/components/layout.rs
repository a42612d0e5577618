//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar column
pub const SIDEBAR_WIDTH: u16 = 26;

/// Areas of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Header on top, help bar at the bottom, sidebar left of the page
pub fn calculate_shell_layout(area: Rect) -> ShellLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    ShellLayout {
        header: rows[0],
        sidebar: columns[0],
        content: columns[1],
        help: rows[2],
    }
}

/// Split a page into a row of cards and the remaining body
pub fn cards_and_body(area: Rect, cards: usize, card_height: u16) -> (Vec<Rect>, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card_height), Constraint::Min(0)])
        .split(area);

    let card_areas = if cards == 0 {
        Vec::new()
    } else {
        let constraints = vec![Constraint::Ratio(1, cards as u32); cards];
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[0])
            .to_vec()
    };

    (card_areas, rows[1])
}

/// Split an area into two columns by percentage
pub fn two_columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent.min(100)),
        ])
        .split(area);
    (columns[0], columns[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_layout_partitions_area() {
        let layout = calculate_shell_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.sidebar, Rect::new(0, 3, SIDEBAR_WIDTH, 26));
        assert_eq!(layout.content, Rect::new(SIDEBAR_WIDTH, 3, 100 - SIDEBAR_WIDTH, 26));
        assert_eq!(layout.help, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_popup(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_popup(area, 40, 40), Rect::new(0, 0, 20, 10));
    }

    #[test]
    fn test_cards_and_body() {
        let (cards, body) = cards_and_body(Rect::new(0, 0, 90, 20), 3, 4);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].height, 4);
        assert_eq!(body, Rect::new(0, 4, 90, 16));

        let (cards, _) = cards_and_body(Rect::new(0, 0, 90, 20), 0, 4);
        assert!(cards.is_empty());
    }
}
