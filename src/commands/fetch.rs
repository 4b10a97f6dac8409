use super::common::{Common, CommonArgs};
use clap::Parser;
use demostat::Result;
use ohno::IntoAppError;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Output the records to a file instead of to stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn process_fetch(args: &FetchArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let sample = common.fetch_sample().await?;

    let json = serde_json::to_string_pretty(&sample.records).into_app_err("unable to encode records as JSON")?;

    match &args.output {
        Some(filename) => fs::write(filename, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
