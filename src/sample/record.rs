use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Gender label as reported by the sample API.
///
/// The API only ever produces these two values; an unexpected label is a
/// decode error rather than a silent bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// Date-of-birth block; only the precomputed age is consumed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Registration {
    pub date: DateTime<Utc>,
}

/// One synthetic user record, reduced to the fields the summaries consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub gender: Gender,
    pub dob: DateOfBirth,
    pub location: Location,
    pub registered: Registration,
}

impl UserRecord {
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.dob.age
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.location.country
    }

    /// Calendar year of the registration timestamp (UTC).
    #[must_use]
    pub fn registration_year(&self) -> i32 {
        self.registered.date.year()
    }
}

/// Metadata block the API attaches to every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleInfo {
    pub seed: String,
    pub results: u64,
    pub page: u64,
    pub version: String,
}

/// The raw response body: an ordered `results` array plus an `info` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<UserRecord>,
    pub info: SampleInfo,
}

/// A successfully fetched sample, stamped with the fetch time.
#[derive(Debug, Clone)]
pub struct Sample {
    pub records: Vec<UserRecord>,
    pub info: SampleInfo,
    pub fetched_at: DateTime<Utc>,
}

impl Sample {
    /// A sample with no records in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            info: SampleInfo {
                seed: String::new(),
                results: 0,
                page: 0,
                version: String::new(),
            },
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
