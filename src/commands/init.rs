use clap::Parser;
use demostat::Result;
use demostat::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path
    #[arg(value_name = "PATH", default_value = "demostat.toml")]
    pub output: PathBuf,
}

pub fn init_config(args: &InitArgs) -> Result<()> {
    let config = Config::default();
    config.save(&args.output)?;
    println!("Generated default configuration file: {}", args.output.display());
    Ok(())
}
