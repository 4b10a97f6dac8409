//! A tool to fetch synthetic user records and summarize their demographics.
//!
//! # Overview
//!
//! `demostat` pulls a sample of randomly generated user records from the
//! [Random User Generator](https://randomuser.me) API and aggregates them into
//! four demographic views: gender split, age distribution by decade, records
//! per country, and registrations per year. Results are displayed as a
//! formatted console report or written to JSON or CSV files.
//!
//! # Installation
//!
//! ```bash
//! cargo install demostat
//! ```
//!
//! # Quick Start
//!
//! Fetch 1000 records and display the demographic report:
//!
//! ```bash
//! demostat report
//! ```
//!
//! # Basic Usage
//!
//! ## Generating Reports
//!
//! **Default report (1000 records):**
//! ```bash
//! demostat report
//! ```
//!
//! **Smaller or larger samples:**
//! ```bash
//! demostat report --results 250
//! demostat report -n 5000
//! ```
//!
//! **Reproducible samples:**
//! ```bash
//! demostat report --seed demostat --results 1000
//! ```
//!
//! The same seed and result count always produce the same records, which
//! makes reports comparable across runs.
//!
//! **Restricting nationalities:**
//! ```bash
//! demostat report --nat us,gb,fr
//! ```
//!
//! ## Report Files
//!
//! **JSON report:**
//! ```bash
//! demostat report --json summary.json
//! ```
//!
//! **CSV report:**
//! ```bash
//! demostat report --csv summary.csv
//! ```
//!
//! **Both formats:**
//! ```bash
//! demostat report --json summary.json --csv summary.csv
//! ```
//!
//! Note: Console output is suppressed when generating report files.
//!
//! ## Raw Records
//!
//! Dump the fetched records as JSON without summarizing them:
//!
//! ```bash
//! demostat fetch --results 10
//! demostat fetch --output records.json
//! ```
//!
//! # Configuration
//!
//! ## Using Configuration Files
//!
//! **Specify a config file:**
//! ```bash
//! demostat report --config demostat.toml
//! ```
//!
//! **Default search locations:**
//! - `demostat.toml`
//! - `demostat.yml`
//! - `demostat.yaml`
//! - `demostat.json`
//!
//! **Generate default config:**
//! ```bash
//! demostat init
//! ```
//!
//! ## Configuration Structure
//!
//! All configuration fields are optional; unspecified fields use sensible
//! defaults. Command-line flags override config file values.
//!
//! ```toml
//! # Number of records to request (1 to 5000)
//! results = 1000
//!
//! # Seed for reproducible samples
//! seed = "demostat"
//!
//! # Restrict the sample to these nationality codes
//! nationalities = ["us", "gb", "fr"]
//!
//! # Request timeout in seconds
//! timeout_secs = 30
//!
//! # Number of countries to show in the console report (0 = all)
//! top_countries = 15
//! ```
//!
//! ## Validation Only
//!
//! Validate configuration without fetching anything:
//!
//! ```bash
//! demostat validate
//! demostat validate --config custom.toml
//! ```
//!
//! Validation warnings are printed to stderr but don't prevent execution.
//!
//! # Troubleshooting
//!
//! ## Fetch Failures
//!
//! If the sample API is unreachable or returns an error, `demostat` reports
//! the failure and exits with a non-zero status. No partial report is shown.
//! Run with `--log-level debug` to see the request URL and response details.
//!
//! ## No Console Output
//!
//! Console output is suppressed when generating report files. Run without
//! `--json` or `--csv` to see the console report.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use demostat::Result;

mod commands;

use crate::commands::{
    FetchArgs, InitArgs, ReportArgs, ValidateArgs, init_config, process_fetch, process_report, validate_config,
};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "demostat", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: DemostatSubcommand,
}

#[derive(Subcommand, Debug)]
enum DemostatSubcommand {
    /// Fetch a sample and display a demographic report
    Report(Box<ReportArgs>),
    /// Fetch a sample and output the raw records as JSON
    Fetch(Box<FetchArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        DemostatSubcommand::Report(report_args) => process_report(report_args).await,
        DemostatSubcommand::Fetch(fetch_args) => process_fetch(fetch_args).await,
        DemostatSubcommand::Init(init_args) => init_config(init_args),
        DemostatSubcommand::Validate(validate_args) => validate_config(validate_args),
    }
}
