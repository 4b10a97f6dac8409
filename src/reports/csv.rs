use crate::Result;
use crate::sample::{Gender, Sample};
use crate::summary::{Summaries, bucket_label};
use core::fmt::Write;
use std::borrow::Cow;
use strum::IntoEnumIterator;

pub fn generate<W: Write>(sample: &Sample, summaries: &Summaries, writer: &mut W) -> Result<()> {
    writeln!(writer, "section,key,count")?;

    writeln!(writer, "sample,seed,{}", escape_csv(&sample.info.seed))?;
    writeln!(writer, "sample,total_records,{}", summaries.total_records)?;

    for gender in Gender::iter() {
        writeln!(writer, "gender,{},{}", escape_csv(&gender.to_string()), summaries.genders.count(gender))?;
    }

    for (bucket, count) in summaries.ages.iter() {
        writeln!(writer, "age,{},{count}", bucket_label(bucket))?;
    }

    for (country, count) in summaries.countries.by_count() {
        writeln!(writer, "country,{},{count}", escape_csv(country))?;
    }

    for (year, count) in summaries.years.iter() {
        writeln!(writer, "year,{year},{count}")?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
