//! Read-only presentation of a finalized profile. Everything here is a pure
//! function of the record.

use crate::models::PersonRecord;

/// Shown instead of the date of birth when the record has none.
pub const MISSING_DATE: &str = "N/A";
/// Month/day/year, the layout browsers use for `en-US` dates.
const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Display strings derived from a `PersonRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub full_name: String,
    pub job: String,
    pub date_of_birth: String,
    pub bio: String,
    pub location: String,
    pub longitude: String,
    pub latitude: String,
    pub estimated_score: String,
}

impl CardView {
    pub fn from_record(record: &PersonRecord) -> Self {
        let date_of_birth = record
            .date_of_birth
            .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_else(|| MISSING_DATE.to_string());

        Self {
            full_name: record.full_name(),
            job: record.job.clone(),
            date_of_birth,
            bio: record.bio.clone(),
            location: record.location.to_string(),
            longitude: record.location.longitude.clone(),
            latitude: record.location.latitude.clone(),
            estimated_score: format!("{}/10", record.estimated_score),
        }
    }

    /// Labelled body lines, in the order they appear under the name.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Job: {}", self.job),
            format!("Date of Birth: {}", self.date_of_birth),
            format!("Bio: {}", self.bio),
            format!("Location: {}", self.location),
            format!("Longitude: {}", self.longitude),
            format!("Latitude: {}", self.latitude),
            format!("Estimated score: {}", self.estimated_score),
        ]
    }
}
