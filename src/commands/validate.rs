use clap::Parser;
use demostat::Result;
use demostat::config::Config;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file [default: one of demostat.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn validate_config(args: &ValidateArgs) -> Result<()> {
    let config_path = args.config.as_ref();
    let (_, warnings) = Config::load(Path::new("."), config_path)?;

    println!("Configuration validation successful");
    if let Some(path) = config_path {
        println!("Config file: {}", path.display());
    } else {
        println!("Using default configuration (no config file found)");
    }

    // Print warnings if any
    if !warnings.is_empty() {
        eprintln!("\n⚠️  Configuration validation warnings:");
        for warning in &warnings {
            eprintln!("   {warning}");
        }
        eprintln!();
    }

    Ok(())
}
