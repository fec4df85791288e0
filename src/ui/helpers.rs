//! Small layout and styling helpers shared by the views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::card::CardView;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Styled card body: bold name, the job highlighted, the rest plain.
pub(crate) fn card_lines(card: &CardView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.full_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (idx, text) in card.lines().into_iter().enumerate() {
        let style = match idx {
            0 => Style::default().fg(Color::Green),
            1 => Style::default().fg(Color::Gray),
            _ => Style::default(),
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    lines
}
