//! Report generation for sample summaries
//!
//! Three generators are provided, each accessed through a `generate`
//! function and all operating on the same input: the fetched [`Sample`] and
//! its computed [`Summaries`].
//!
//! - **Console**: terminal output with ANSI styling and horizontal bar
//!   charts for the gender, age, and registration-year views, plus a
//!   top-N country list.
//! - **JSON**: machine-readable structured data, pretty-printed.
//! - **CSV**: flat `section,key,count` rows with proper escaping.
//!
//! All generators write through `core::fmt::Write`, so output can go to a
//! string, a file buffer, or a test sink. Empty summaries produce an
//! empty-but-valid report in every format.
//!
//! [`Sample`]: crate::sample::Sample
//! [`Summaries`]: crate::summary::Summaries

mod console;
mod csv;
mod json;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
