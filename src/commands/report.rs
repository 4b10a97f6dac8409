use super::common::{Common, CommonArgs};
use clap::Parser;
use demostat::Result;
use demostat::misc::ColorMode;
use demostat::reports::{generate_console, generate_csv, generate_json};
use demostat::summary::Summaries;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Number of countries to show in the console report (0 = all)
    #[arg(long, value_name = "COUNT")]
    pub top_countries: Option<usize>,

    /// Output the report to a JSON file instead of to the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<PathBuf>,

    /// Output the report to a CSV file instead of to the terminal
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_report(args: &ReportArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let sample = common.fetch_sample().await?;
    let summaries = Summaries::from_records(&sample.records);

    let top_countries = args.top_countries.unwrap_or(common.config.top_countries);
    let generating_reports = args.json.is_some() || args.csv.is_some();

    if !generating_reports {
        let mut console_output = String::new();
        generate_console(&sample, &summaries, args.color, top_countries, &mut console_output)?;
        print!("{console_output}");
    }

    if let Some(filename) = &args.json {
        let mut json = String::new();
        generate_json(&sample, &summaries, &mut json)?;
        fs::write(filename, json)?;
    }

    if let Some(filename) = &args.csv {
        let mut csv = String::new();
        generate_csv(&sample, &summaries, &mut csv)?;
        fs::write(filename, csv)?;
    }

    Ok(())
}
