//! Pure aggregation of a user sample into derived summaries.
//!
//! Four independent views are computed from the raw record sequence in a
//! single pass: gender split, age histogram (decade buckets), per-country
//! counts, and per-registration-year counts. Aggregation never mutates its
//! input and is deterministic; an empty sequence yields empty summaries.
//!
//! Every summary maintains the same invariant: its counts sum to the number
//! of records it was fed.

mod age;
mod country;
mod gender;
mod year;

pub use age::{AgeHistogram, bucket_for, bucket_label};
pub use country::CountrySummary;
pub use gender::GenderSummary;
pub use year::YearSummary;

use crate::sample::UserRecord;

/// All four derived views of one sample.
#[derive(Debug, Clone, Default)]
pub struct Summaries {
    pub genders: GenderSummary,
    pub ages: AgeHistogram,
    pub countries: CountrySummary,
    pub years: YearSummary,
    pub total_records: u64,
}

impl Summaries {
    /// Compute all summaries in one pass over the records.
    #[must_use]
    pub fn from_records(records: &[UserRecord]) -> Self {
        let mut summaries = Self::default();

        for record in records {
            summaries.genders.record(record.gender);
            summaries.ages.record(record.age());
            summaries.countries.record(record.country());
            summaries.years.record(record.registration_year());
        }

        summaries.total_records = records.len() as u64;
        summaries
    }
}
