//! Application state for the TUI. `App` owns the screen controller, the form
//! it swaps out for the card, the toast queue and the RNG used for scores.
//! Key handling is split per view so a key like `Backspace` can edit a field
//! on the form yet mean "back to the form" on the card.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rand::rngs::ThreadRng;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::debug;

use crate::card::CardView;
use crate::form::ProfileForm;
use crate::notify::{Notifier, Severity, Toasts};
use crate::screen::{ScreenController, View};
use crate::validation::Field;

use super::forms;
use super::helpers::{card_lines, centered_rect};

/// Footer space reserved for the toast line and key hints.
const FOOTER_HEIGHT: u16 = 3;
/// Error toasts linger a little longer than the success one.
const ERROR_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Central application state: the screen controller, the form it swaps out
/// for the card, and the pending toasts.
pub struct App {
    screen: ScreenController,
    form: ProfileForm,
    toasts: Toasts,
    rng: ThreadRng,
}

impl App {
    /// Start on an empty form. `toast_duration` is how long the success
    /// notification stays in the footer after a submit.
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            screen: ScreenController::new(),
            form: ProfileForm::new(toast_duration),
            toasts: Toasts::default(),
            rng: rand::thread_rng(),
        }
    }

    /// Which view the next frame draws.
    pub fn view(&self) -> View {
        self.screen.view()
    }

    pub fn screen(&self) -> &ScreenController {
        &self.screen
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Drop notifications that have run their course.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    /// Dispatch a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.screen.view() {
            View::Form => self.handle_form_key(code),
            View::Card => self.handle_card_key(code),
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) -> bool {
        let on_date = self.form.active() == Field::DateOfBirth;
        match code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.previous_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Char(']') if on_date => self.form.shift_date(1),
            KeyCode::Char('[') if on_date => self.form.shift_date(-1),
            KeyCode::PageUp if on_date => self.form.shift_years(1),
            KeyCode::PageDown if on_date => self.form.shift_years(-1),
            KeyCode::Char(ch) => {
                self.form.push_char(ch);
            }
            _ => {}
        }
        false
    }

    fn handle_card_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') | KeyCode::Enter | KeyCode::Backspace => self.screen.on_reset(),
            _ => {}
        }
        false
    }

    fn submit_form(&mut self) {
        let screen = &mut self.screen;
        let result = self
            .form
            .submit(&mut self.rng, &mut self.toasts, |record| screen.on_submit(record));

        if let Err(errors) = result {
            debug!(failures = errors.len(), "form kept open for corrections");
            self.toasts.notify(
                "Please fix the highlighted fields.",
                Severity::Error,
                ERROR_TOAST_DURATION,
            );
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match (self.screen.view(), self.screen.current()) {
            (View::Card, Some(record)) => {
                self.draw_card(frame, content_area, &CardView::from_record(record))
            }
            _ => self.draw_form(frame, content_area),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Profile")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let layout = forms::layout(&self.form);
        let paragraph = Paragraph::new(layout.lines);
        frame.render_widget(paragraph, inner);

        let (col, row) = layout.cursor;
        if row < inner.height && col < inner.width {
            frame.set_cursor_position((inner.x + col, inner.y + row));
        }
    }

    fn draw_card(&self, frame: &mut Frame, area: Rect, card: &CardView) {
        let popup_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Profile Card").borders(Borders::ALL);
        let paragraph = Paragraph::new(card_lines(card))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let toast_line = if let Some(toast) = self.toasts.latest() {
            Line::from(vec![Span::styled(toast.text.clone(), toast.severity.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![toast_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.screen.view() {
            View::Form => Line::from(vec![
                Span::styled("[Tab/↑↓]", key_style),
                Span::raw(" Switch field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Submit   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
            View::Card => Line::from(vec![
                Span::styled("[R]", key_style),
                Span::raw(" New profile   "),
                Span::styled("[Q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use super::*;
    use crate::form::SUBMITTED_MESSAGE;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    fn fill(app: &mut App, values: [&str; 9]) {
        for (idx, value) in values.iter().enumerate() {
            type_text(app, value);
            if idx + 1 < values.len() {
                app.handle_key(KeyCode::Tab);
            }
        }
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    const JOHN: [&str; 9] = [
        "John",
        "Smith",
        "1990-05-01",
        "Developer",
        "x",
        "Paris",
        "France",
        "2.35",
        "48.85",
    ];

    #[test]
    fn successful_submit_switches_to_card() {
        let mut app = App::new(Duration::from_millis(2000));
        fill(&mut app, JOHN);
        assert!(!app.handle_key(KeyCode::Enter));

        assert_eq!(app.view(), View::Card);
        let record = app.screen().current().expect("record stored");
        assert_eq!(record.full_name(), "John Smith");
        assert!((1..=10).contains(&record.estimated_score));

        let screen = render(&app);
        assert!(screen.contains("John Smith"));
        assert!(screen.contains("Job: Developer"));
        assert!(screen.contains("Location: Paris, France"));
        assert!(screen.contains(SUBMITTED_MESSAGE));
    }

    #[test]
    fn short_first_name_keeps_form_open() {
        let mut app = App::new(Duration::from_millis(2000));
        let mut values = JOHN;
        values[0] = "Bob";
        fill(&mut app, values);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.view(), View::Form);
        assert_eq!(app.form().draft().first_name, "Bob");

        let screen = render(&app);
        assert!(screen.contains("First name must be at least 4 letters"));
        assert!(screen.contains("Please fix the highlighted fields."));
    }

    #[test]
    fn reset_from_card_shows_an_empty_form() {
        let mut app = App::new(Duration::from_millis(2000));
        fill(&mut app, JOHN);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('r'));

        assert_eq!(app.view(), View::Form);
        assert!(app.screen().current().is_none());
        assert_eq!(app.form().draft().first_name, "");
        assert!(render(&app).contains("<required>"));
    }

    #[test]
    fn toasts_expire_on_tick() {
        let mut app = App::new(Duration::from_millis(10));
        fill(&mut app, JOHN);
        app.handle_key(KeyCode::Enter);
        assert!(render(&app).contains(SUBMITTED_MESSAGE));

        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(!render(&app).contains(SUBMITTED_MESSAGE));
    }

    #[test]
    fn date_keys_only_shift_on_the_date_field() {
        let mut app = App::new(Duration::from_millis(2000));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Tab);
        type_text(&mut app, "1990-05-01");
        app.handle_key(KeyCode::Char(']'));
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.form().draft().date_of_birth, "1989-05-02");

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.form().draft().last_name, "]");
    }

    #[test]
    fn escape_quits_from_both_views() {
        let mut app = App::new(Duration::from_millis(2000));
        assert!(app.handle_key(KeyCode::Esc));
        fill(&mut app, JOHN);
        app.handle_key(KeyCode::Enter);
        assert!(app.handle_key(KeyCode::Char('q')));
    }
}
