//! Transient notifications ("toasts"). The form only knows the `Notifier`
//! trait; the terminal UI owns a `Toasts` queue and draws the newest entry in
//! the footer until it expires.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};

/// How a notification should be styled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn style(&self) -> Style {
        match self {
            Severity::Info => Style::default().fg(Color::Cyan),
            Severity::Success => Style::default().fg(Color::Green),
            Severity::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Pending toasts in arrival order.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    /// Push a toast that expires `duration` after `now`.
    pub fn push_at(&mut self, message: &str, severity: Severity, duration: Duration, now: Instant) {
        self.queue.push(Toast {
            text: message.to_string(),
            severity,
            expires_at: now + duration,
        });
    }

    /// Drop every toast whose deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        self.queue.retain(|toast| toast.expires_at > now);
    }

    /// The toast currently on display.
    pub fn latest(&self) -> Option<&Toast> {
        self.queue.last()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration) {
        self.push_at(message, severity, duration, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_disappear_after_their_duration() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push_at("saved", Severity::Success, Duration::from_millis(2000), start);

        toasts.expire(start + Duration::from_millis(1999));
        assert_eq!(toasts.latest().map(|t| t.text.as_str()), Some("saved"));

        toasts.expire(start + Duration::from_millis(2000));
        assert!(toasts.is_empty());
    }

    #[test]
    fn newest_toast_is_shown() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push_at("first", Severity::Info, Duration::from_secs(5), start);
        toasts.push_at("second", Severity::Error, Duration::from_secs(1), start);

        assert_eq!(toasts.latest().map(|t| t.severity), Some(Severity::Error));

        toasts.expire(start + Duration::from_secs(2));
        assert_eq!(toasts.latest().map(|t| t.text.as_str()), Some("first"));
    }
}
