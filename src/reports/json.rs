use crate::Result;
use crate::sample::{Gender, Sample};
use crate::summary::{Summaries, bucket_label};
use core::fmt::Write;
use serde_json::json;
use strum::IntoEnumIterator;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(sample: &Sample, summaries: &Summaries, writer: &mut W) -> Result<()> {
    let mut sample_obj = serde_json::Map::new();
    sample_obj.insert("total_records".to_string(), json!(summaries.total_records));
    sample_obj.insert("seed".to_string(), json!(sample.info.seed));
    sample_obj.insert("fetched_at".to_string(), json!(sample.fetched_at.to_rfc3339()));

    let mut gender_obj = serde_json::Map::new();
    for gender in Gender::iter() {
        gender_obj.insert(gender.to_string(), json!(summaries.genders.count(gender)));
    }

    let mut age_obj = serde_json::Map::new();
    for (bucket, count) in summaries.ages.iter() {
        age_obj.insert(bucket_label(bucket), json!(count));
    }

    let mut country_obj = serde_json::Map::new();
    for (country, count) in summaries.countries.iter() {
        country_obj.insert(country.to_string(), json!(count));
    }

    let mut year_obj = serde_json::Map::new();
    for (year, count) in summaries.years.iter() {
        year_obj.insert(year.to_string(), json!(count));
    }

    let output = json!({
        "sample": sample_obj,
        "gender": gender_obj,
        "age_histogram": age_obj,
        "countries": country_obj,
        "registration_years": year_obj,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
