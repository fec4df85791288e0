//! Domain models shared by the form, the screen controller and the card. The
//! types stay plain data holders so the other layers can focus on validation
//! and presentation.

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Where the person lives. Coordinates are kept as the text the user typed;
/// nothing downstream needs them as numbers.
pub struct Location {
    pub city: String,
    pub country: String,
    pub longitude: String,
    pub latitude: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A finalized profile. Only the form's submit path builds one from user
/// input, after validation passed and the score was drawn.
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    /// Always `Some` for records produced by the form. Kept optional so the
    /// card can still render records assembled elsewhere.
    pub date_of_birth: Option<NaiveDate>,
    pub job: String,
    pub bio: String,
    pub location: Location,
    /// Drawn once at submission time, in `1..=10`.
    pub estimated_score: u8,
}

impl PersonRecord {
    /// `First Last`, the heading used on the card.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
