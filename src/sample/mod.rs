//! Fetching synthetic user samples from the Random User Generator API.
//!
//! A [`Provider`] owns the HTTP client and issues a single GET per
//! [`SampleRequest`]. The response is decoded into the subset of fields the
//! rest of the tool consumes: gender, age, country, and registration date.

mod provider;
mod record;

pub use provider::{Provider, SampleRequest};
pub use record::{ApiResponse, DateOfBirth, Gender, Location, Registration, Sample, SampleInfo, UserRecord};
