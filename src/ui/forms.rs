//! Rendering of the profile form. Labels are right-aligned to a common width
//! so the inputs form a single column, and each visible validation message
//! sits on its own line under the field it belongs to. Cursor placement is
//! computed alongside the lines because error rows shift every field below.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::form::{FormPhase, ProfileForm};
use crate::validation::Field;

/// Width the field labels are right-aligned to so the inputs line up.
const LABEL_WIDTH: usize = 13;

/// Rendered form body plus where the terminal cursor should sit.
pub(crate) struct FormLayout {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) cursor: (u16, u16),
}

/// Placeholder shown in an empty input.
fn placeholder(field: Field) -> &'static str {
    match field {
        Field::DateOfBirth => "<YYYY-MM-DD>",
        _ => "<required>",
    }
}

fn prefix(field: Field) -> String {
    format!("{:>width$}: ", field.label(), width = LABEL_WIDTH)
}

/// Render a single input line.
pub(crate) fn build_line(form: &ProfileForm, field: Field) -> Line<'static> {
    let value = form.draft().value(field);
    let is_active = form.active() == field;

    let display = if value.is_empty() {
        placeholder(field).to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if form.visible_error(field).is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let label_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(prefix(field), label_style),
        Span::styled(display, style),
    ])
}

/// Lay out every field with its visible error underneath, followed by the
/// hint or summary line. Rows are relative to the form's inner area.
pub(crate) fn layout(form: &ProfileForm) -> FormLayout {
    let mut lines = Vec::with_capacity(Field::ALL.len() * 2 + 2);
    let mut cursor = (0, 0);

    for field in Field::ALL {
        if field == form.active() {
            let col = prefix(field).chars().count() + form.draft().value(field).chars().count();
            cursor = (col as u16, lines.len() as u16);
        }
        lines.push(build_line(form, field));
        if let Some(err) = form.visible_error(field) {
            lines.push(Line::from(Span::styled(
                format!("{:width$}  {err}", "", width = LABEL_WIDTH),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    if form.phase() == FormPhase::Error {
        lines.push(Line::from(Span::styled(
            format!("{} field(s) need attention.", form.errors().len()),
            Style::default().fg(Color::Red),
        )));
    } else if form.active() == Field::DateOfBirth {
        lines.push(Line::from(Span::styled(
            "[ ] shift a day • PgUp/PgDn shift a year",
            Style::default().fg(Color::Gray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter to submit • Tab to switch • Esc to quit",
            Style::default().fg(Color::Gray),
        )));
    }

    FormLayout { lines, cursor }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn cursor_follows_active_field_and_error_rows() {
        let mut form = ProfileForm::default();
        form.push_char('B');
        form.next_field();
        form.push_char('S');

        let layout = layout(&form);
        // First name, its error line, then last name.
        assert_eq!(layout.cursor.1, 2);
        assert_eq!(layout.cursor.0 as usize, LABEL_WIDTH + 2 + 1);
        assert!(text(&layout.lines[1]).contains("at least 4 letters"));
    }

    #[test]
    fn empty_fields_show_placeholders() {
        let form = ProfileForm::default();
        let layout = layout(&form);
        assert_eq!(text(&layout.lines[0]), "   First Name: <required>");
        assert_eq!(text(&layout.lines[2]), "Date of Birth: <YYYY-MM-DD>");
    }
}
