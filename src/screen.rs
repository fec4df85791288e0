//! The screen controller owns the one piece of application state: the record
//! that was last submitted, if any. Its presence decides which view is shown.

use tracing::info;

use crate::models::PersonRecord;

/// Which top-level view the UI should render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Form,
    Card,
}

#[derive(Debug, Default)]
pub struct ScreenController {
    current: Option<PersonRecord>,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the submitted record and switch to the card. The form already
    /// validated it, so nothing is checked here.
    pub fn on_submit(&mut self, record: PersonRecord) {
        info!(name = %record.full_name(), "showing profile card");
        self.current = Some(record);
    }

    /// Drop the record and go back to the form.
    pub fn on_reset(&mut self) {
        if self.current.take().is_some() {
            info!("profile card discarded, back to the form");
        }
    }

    pub fn current(&self) -> Option<&PersonRecord> {
        self.current.as_ref()
    }

    pub fn view(&self) -> View {
        if self.current.is_some() {
            View::Card
        } else {
            View::Form
        }
    }
}
