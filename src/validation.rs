//! Field schema for the profile form: which fields exist, the rule each one
//! must satisfy, and the messages shown when a rule fails.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::models::Location;

/// Canonical text format of the date of birth field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{4,}$").expect("name pattern is a valid regex"));

/// Every input on the form, in display and focus order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
    Job,
    Bio,
    City,
    Country,
    Longitude,
    Latitude,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::Job,
        Field::Bio,
        Field::City,
        Field::Country,
        Field::Longitude,
        Field::Latitude,
    ];

    /// Label rendered in front of the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::DateOfBirth => "Date of Birth",
            Field::Job => "Job Title",
            Field::Bio => "Bio",
            Field::City => "City",
            Field::Country => "Country",
            Field::Longitude => "Longitude",
            Field::Latitude => "Latitude",
        }
    }

    /// Name used in "... is required" messages.
    fn noun(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::DateOfBirth => "Date of birth",
            Field::Job => "Job title",
            Field::Bio => "Bio",
            Field::City => "City",
            Field::Country => "Country",
            Field::Longitude => "Longitude",
            Field::Latitude => "Latitude",
        }
    }

    pub fn next(self) -> Field {
        let idx = self.index();
        Field::ALL[(idx + 1) % Field::ALL.len()]
    }

    pub fn previous(self) -> Field {
        let idx = self.index();
        Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    pub fn index(self) -> usize {
        Field::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be at least 4 letters with no digits or punctuation")]
    InvalidName(&'static str),
    #[error("Date of birth must be a valid date (YYYY-MM-DD)")]
    InvalidDate,
}

/// Raw, possibly invalid input held by the form before submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub job: String,
    pub bio: String,
    pub city: String,
    pub country: String,
    pub longitude: String,
    pub latitude: String,
}

impl Draft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Job => &self.job,
            Field::Bio => &self.bio,
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::Longitude => &self.longitude,
            Field::Latitude => &self.latitude,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Job => &mut self.job,
            Field::Bio => &mut self.bio,
            Field::City => &mut self.city,
            Field::Country => &mut self.country,
            Field::Longitude => &mut self.longitude,
            Field::Latitude => &mut self.latitude,
        }
    }
}

/// Field-level failures of one validation pass, ordered like the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    fn insert(&mut self, field: Field, err: FieldError) {
        self.errors.insert(field, err);
    }
}

/// Output of a passing validation run. The date is no longer optional here,
/// which is what lets the submit path skip any "missing date" fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub job: String,
    pub bio: String,
    pub location: Location,
}

/// Check one field against its rule. A value only counts as missing when it
/// is the empty string; whitespace is accepted as typed.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    match field {
        Field::FirstName | Field::LastName => {
            require(field, raw)?;
            if NAME_PATTERN.is_match(raw) {
                Ok(())
            } else {
                Err(FieldError::InvalidName(field.noun()))
            }
        }
        Field::DateOfBirth => validate_date(raw).map(|_| ()),
        _ => require(field, raw),
    }
}

fn require(field: Field, raw: &str) -> Result<(), FieldError> {
    if raw.is_empty() {
        Err(FieldError::Required(field.noun()))
    } else {
        Ok(())
    }
}

fn validate_date(raw: &str) -> Result<NaiveDate, FieldError> {
    require(Field::DateOfBirth, raw)?;
    parse_date(raw)
}

/// Parse the date field, accepting surrounding whitespace.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

/// Run every rule. Only the collected errors are returned on failure so the
/// caller can show all messages at once.
pub fn validate(draft: &Draft) -> Result<ValidDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut date_of_birth = None;
    for field in Field::ALL {
        let raw = draft.value(field);
        let outcome = match field {
            Field::DateOfBirth => validate_date(raw).map(|date| date_of_birth = Some(date)),
            _ => validate_field(field, raw),
        };
        if let Err(err) = outcome {
            errors.insert(field, err);
        }
    }

    let Some(date_of_birth) = date_of_birth.filter(|_| errors.is_empty()) else {
        return Err(errors);
    };

    Ok(ValidDraft {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        date_of_birth,
        job: draft.job.clone(),
        bio: draft.bio.clone(),
        location: Location {
            city: draft.city.clone(),
            country: draft.country.clone(),
            longitude: draft.longitude.clone(),
            latitude: draft.latitude.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> Draft {
        Draft {
            first_name: "John".into(),
            last_name: "Smith".into(),
            date_of_birth: "1990-05-01".into(),
            job: "Developer".into(),
            bio: "x".into(),
            city: "Paris".into(),
            country: "France".into(),
            longitude: "2.35".into(),
            latitude: "48.85".into(),
        }
    }

    #[test]
    fn complete_draft_validates_verbatim() {
        let valid = validate(&complete_draft()).expect("draft should pass");
        assert_eq!(valid.first_name, "John");
        assert_eq!(valid.last_name, "Smith");
        assert_eq!(
            valid.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()
        );
        assert_eq!(valid.location.city, "Paris");
        assert_eq!(valid.location.longitude, "2.35");
    }

    #[test]
    fn names_need_four_ascii_letters() {
        assert!(validate_field(Field::FirstName, "John").is_ok());
        assert!(validate_field(Field::LastName, "Smithson").is_ok());
        assert_eq!(
            validate_field(Field::FirstName, "Bob"),
            Err(FieldError::InvalidName("First name"))
        );
        assert!(validate_field(Field::LastName, "Sm1th").is_err());
        assert!(validate_field(Field::LastName, "O'Neil").is_err());
        assert!(validate_field(Field::FirstName, "Jean Luc").is_err());
        assert!(validate_field(Field::FirstName, "Zoë").is_err());
    }

    #[test]
    fn only_empty_values_are_missing() {
        for field in Field::ALL {
            assert!(matches!(
                validate_field(field, ""),
                Err(FieldError::Required(_))
            ));
        }
        for field in [
            Field::Job,
            Field::Bio,
            Field::City,
            Field::Country,
            Field::Longitude,
            Field::Latitude,
        ] {
            assert_eq!(validate_field(field, " "), Ok(()));
        }
        assert_eq!(
            FieldError::Required(Field::Job.noun()).to_string(),
            "Job title is required"
        );
    }

    #[test]
    fn whitespace_bio_passes_whole_draft() {
        let mut draft = complete_draft();
        draft.bio = " ".into();
        let valid = validate(&draft).expect("whitespace is a value");
        assert_eq!(valid.bio, " ");
    }

    #[test]
    fn padded_date_still_parses() {
        let mut draft = complete_draft();
        draft.date_of_birth = " 1990-05-01 ".into();
        assert_eq!(
            validate(&draft).map(|valid| valid.date_of_birth),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
        );
        assert_eq!(
            validate_field(Field::DateOfBirth, " "),
            Err(FieldError::InvalidDate)
        );
    }

    #[test]
    fn dates_must_exist_on_the_calendar() {
        assert!(validate_field(Field::DateOfBirth, "2000-02-29").is_ok());
        assert_eq!(
            validate_field(Field::DateOfBirth, "2001-02-29"),
            Err(FieldError::InvalidDate)
        );
        assert!(validate_field(Field::DateOfBirth, "05/01/1990").is_err());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut draft = complete_draft();
        draft.first_name = "Bob".into();
        draft.city.clear();
        draft.latitude.clear();

        let errors = validate(&draft).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::City, Field::Latitude]);
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(Field::Latitude.next(), Field::FirstName);
        assert_eq!(Field::FirstName.previous(), Field::Latitude);
        assert_eq!(Field::DateOfBirth.next(), Field::Job);
    }
}
