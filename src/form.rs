//! The profile form: owns the draft, tracks which fields were touched, keeps
//! the latest validation result, and turns a valid draft into a
//! `PersonRecord` on submit.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{Days, Local, Months, NaiveDate};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::models::PersonRecord;
use crate::notify::{Notifier, Severity};
use crate::validation::{
    parse_date, validate, Draft, Field, FieldError, ValidationErrors, DATE_FORMAT,
};

/// Message sent to the notifier after a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";
/// How long the success toast stays up unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);
/// Inclusive bounds of the estimated score.
pub const SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Where the form is in its edit/submit cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitted,
    Error,
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    draft: Draft,
    touched: HashSet<Field>,
    errors: ValidationErrors,
    active: Field,
    phase: FormPhase,
    toast_duration: Duration,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ProfileForm {
    pub fn new(toast_duration: Duration) -> Self {
        let draft = Draft::default();
        let errors = validate(&draft).err().unwrap_or_default();
        Self {
            draft,
            touched: HashSet::new(),
            errors,
            active: Field::FirstName,
            phase: FormPhase::Editing,
            toast_duration,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn active(&self) -> Field {
        self.active
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Latest validation result for the whole draft, touched or not.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The message the UI should show next to `field`, if any.
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Move focus, marking the field we leave as touched.
    pub fn focus(&mut self, field: Field) {
        if field != self.active {
            self.touched.insert(self.active);
            self.active = field;
        }
    }

    pub fn next_field(&mut self) {
        self.focus(self.active.next());
    }

    pub fn previous_field(&mut self) {
        self.focus(self.active.previous());
    }

    /// Append a character to the focused field. Control characters are
    /// ignored and reported back as `false`.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.draft.value_mut(self.active).push(ch);
        self.revalidate();
        true
    }

    pub fn backspace(&mut self) {
        if self.draft.value_mut(self.active).pop().is_some() {
            self.revalidate();
        }
    }

    /// Replace the value of a field wholesale, as a paste or an external
    /// widget would.
    pub fn set_value(&mut self, field: Field, value: &str) {
        *self.draft.value_mut(field) = value.to_string();
        self.revalidate();
    }

    /// Date-picker hook: store `date` in canonical form.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.set_value(Field::DateOfBirth, &date.format(DATE_FORMAT).to_string());
    }

    /// Move the entered date by whole days. Starts from today when the field
    /// does not hold a valid date yet.
    pub fn shift_date(&mut self, days: i64) {
        let base = self.current_date_or_today();
        let shifted = if days >= 0 {
            base.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            base.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        self.select_date(shifted.unwrap_or(base));
    }

    /// Move the entered date by whole years, clamping Feb 29 to Feb 28.
    pub fn shift_years(&mut self, years: i32) {
        let base = self.current_date_or_today();
        let months = Months::new(years.unsigned_abs().saturating_mul(12));
        let shifted = if years >= 0 {
            base.checked_add_months(months)
        } else {
            base.checked_sub_months(months)
        };
        self.select_date(shifted.unwrap_or(base));
    }

    fn current_date_or_today(&self) -> NaiveDate {
        parse_date(&self.draft.date_of_birth).unwrap_or_else(|_| Local::now().date_naive())
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.draft).err().unwrap_or_default();
        self.phase = match self.phase {
            FormPhase::Error if !self.errors.is_empty() => FormPhase::Error,
            _ => FormPhase::Editing,
        };
    }

    /// Validate the whole draft and, when it passes, hand a finalized record
    /// to `on_submit`, reset the form, and raise a success toast.
    ///
    /// On failure the draft is left untouched, every field is marked touched
    /// so all messages become visible, and the errors are returned.
    pub fn submit<R, N, F>(
        &mut self,
        rng: &mut R,
        notifier: &mut N,
        on_submit: F,
    ) -> Result<(), ValidationErrors>
    where
        R: Rng,
        N: Notifier + ?Sized,
        F: FnOnce(PersonRecord),
    {
        self.phase = FormPhase::Validating;
        self.touched.extend(Field::ALL);

        let valid = match validate(&self.draft) {
            Ok(valid) => valid,
            Err(errors) => {
                warn!(failures = errors.len(), "profile submission rejected");
                for (field, err) in errors.iter() {
                    debug!(?field, %err, "field failed validation");
                }
                self.errors = errors.clone();
                self.phase = FormPhase::Error;
                return Err(errors);
            }
        };

        let estimated_score = rng.gen_range(SCORE_RANGE);
        let record = PersonRecord {
            first_name: valid.first_name,
            last_name: valid.last_name,
            date_of_birth: Some(valid.date_of_birth),
            job: valid.job,
            bio: valid.bio,
            location: valid.location,
            estimated_score,
        };
        info!(estimated_score, "profile submitted");
        on_submit(record);

        self.reset();
        self.phase = FormPhase::Submitted;
        notifier.notify(SUBMITTED_MESSAGE, Severity::Success, self.toast_duration);
        Ok(())
    }

    /// Back to the initial empty state, keeping the configured toast length.
    pub fn reset(&mut self) {
        *self = Self::new(self.toast_duration);
    }
}
