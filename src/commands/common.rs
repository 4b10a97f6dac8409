//! Common processing logic shared between the report and fetch commands.

use clap::Args;
use clap::ValueEnum;
use core::time::Duration;
use demostat::Result;
use demostat::config::{Config, MAX_RESULTS_PER_REQUEST};
use demostat::sample::{Provider, Sample, SampleRequest};
use indicatif::{ProgressBar, ProgressStyle};
use ohno::IntoAppError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use url::Url;

/// Refresh rate for spinner updates (10 Hz).
const REFRESH_INTERVAL_MS: u64 = 100;

const SPINNER_TEMPLATE: &str = "{prefix:>12.bold.cyan} [{spinner}] {msg}";
const SPINNER_TEMPLATE_NO_COLOR: &str = "{prefix:>12} [{spinner}] {msg}";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Common arguments shared between the report and fetch commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file [default: one of demostat.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of records to request from the sample API
    #[arg(long, short = 'n', value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RESULTS_PER_REQUEST)))]
    pub results: Option<u32>,

    /// Seed for reproducible samples
    #[arg(long, value_name = "SEED")]
    pub seed: Option<String>,

    /// Restrict the sample to these nationality codes (e.g. us,gb,fr)
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub nat: Vec<String>,

    /// Base URL of the sample API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<Url>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common {
    pub config: Config,
    provider: Provider,
    request: SampleRequest,
    log_level: LogLevel,
}

impl Common {
    /// Create a new Common processor with logger, config, and sample provider
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or the HTTP client
    /// cannot be initialized
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let (mut config, warnings) = Config::load(Path::new("."), args.config.as_ref())?;

        // Print warnings if any
        if !warnings.is_empty() {
            eprintln!("\n⚠️  Configuration validation warnings:");
            for warning in &warnings {
                eprintln!("   {warning}");
            }
            eprintln!();
        }

        // Command-line arguments take precedence over the config file
        if let Some(results) = args.results {
            config.results = results;
        }
        if let Some(seed) = &args.seed {
            config.seed = Some(seed.clone());
        }
        if !args.nat.is_empty() {
            config.nationalities = args.nat.clone();
        }
        if let Some(timeout) = args.timeout {
            config.timeout_secs = timeout;
        }

        let base_url = if let Some(url) = &args.api_url {
            Some(url.clone())
        } else if let Some(url) = &config.api_url {
            Some(Url::parse(url).into_app_err("invalid api_url in configuration")?)
        } else {
            None
        };

        let provider = Provider::new(base_url.as_ref(), Duration::from_secs(config.timeout_secs))?;

        let request = SampleRequest {
            results: config.results.min(MAX_RESULTS_PER_REQUEST),
            seed: config.seed.clone(),
            nationalities: config.nationalities.clone(),
        };

        Ok(Self {
            config,
            provider,
            request,
            log_level: args.log_level,
        })
    }

    /// Fetch a sample, showing a spinner while the request is in flight.
    ///
    /// The spinner is suppressed when logging is enabled since it would
    /// interfere with log output.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded
    pub async fn fetch_sample(&self) -> Result<Sample> {
        // An explicit request for zero records means an empty sample, not a
        // round trip to the API
        if self.request.results == 0 {
            return Ok(Sample::empty());
        }

        let spinner = (self.log_level == LogLevel::None).then(|| {
            let template = if std::io::stderr().is_terminal() {
                SPINNER_TEMPLATE
            } else {
                SPINNER_TEMPLATE_NO_COLOR
            };

            let bar = ProgressBar::new_spinner();
            bar.set_style(ProgressStyle::default_spinner().template(template).expect("could not create progress bar style"));
            bar.set_prefix("Fetching");
            bar.set_message(format!("{} record(s)", self.request.results));
            bar.enable_steady_tick(Duration::from_millis(REFRESH_INTERVAL_MS));
            bar
        });

        let result = self.provider.fetch_sample(&self.request).await;

        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }

        result
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level = match log_level {
            LogLevel::None => return, // Already checked above, but being explicit
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args_with_config(config_path: PathBuf) -> CommonArgs {
        CommonArgs {
            config: Some(config_path),
            results: None,
            seed: None,
            nat: Vec::new(),
            api_url: None,
            timeout: None,
            log_level: LogLevel::None,
        }
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("demostat.toml");
        fs::write(&config_path, contents).unwrap();
        (temp_dir, config_path)
    }

    #[test]
    fn test_config_values_flow_into_request() {
        let (_temp_dir, config_path) = write_config(
            "results = 100\nseed = \"from-file\"\nnationalities = [\"dk\"]\ntimeout_secs = 60\n",
        );

        let common = Common::new(&args_with_config(config_path)).unwrap();

        assert_eq!(common.request.results, 100);
        assert_eq!(common.request.seed.as_deref(), Some("from-file"));
        assert_eq!(common.request.nationalities, vec!["dk".to_string()]);
        assert_eq!(common.config.timeout_secs, 60);
    }

    #[test]
    fn test_command_line_overrides_config() {
        let (_temp_dir, config_path) = write_config(
            "results = 100\nseed = \"from-file\"\nnationalities = [\"dk\"]\ntimeout_secs = 60\n",
        );

        let mut args = args_with_config(config_path);
        args.results = Some(250);
        args.seed = Some("from-cli".to_string());
        args.nat = vec!["us".to_string(), "gb".to_string()];
        args.timeout = Some(5);

        let common = Common::new(&args).unwrap();

        assert_eq!(common.request.results, 250);
        assert_eq!(common.request.seed.as_deref(), Some("from-cli"));
        assert_eq!(common.request.nationalities, vec!["us".to_string(), "gb".to_string()]);
        assert_eq!(common.config.timeout_secs, 5);
    }

    #[test]
    fn test_api_url_override_skips_config_url() {
        // The config URL is unparsable, so construction only succeeds if
        // the command-line URL takes precedence.
        let (_temp_dir, config_path) = write_config("api_url = \"not a url\"\n");

        let mut args = args_with_config(config_path.clone());
        args.api_url = Some(Url::parse("http://localhost:8080/api/").unwrap());
        assert!(Common::new(&args).is_ok());

        assert!(Common::new(&args_with_config(config_path)).is_err());
    }

    #[test]
    fn test_oversized_results_clamped_to_api_maximum() {
        let (_temp_dir, config_path) = write_config("results = 9999\n");

        let common = Common::new(&args_with_config(config_path)).unwrap();

        assert_eq!(common.request.results, MAX_RESULTS_PER_REQUEST);
    }

    #[tokio::test]
    async fn test_zero_results_skips_fetch() {
        // The API URL points at a dead port, so any network round trip
        // would fail.
        let (_temp_dir, config_path) = write_config("results = 0\napi_url = \"http://127.0.0.1:9/\"\n");

        let common = Common::new(&args_with_config(config_path)).unwrap();
        let sample = common.fetch_sample().await.unwrap();

        assert!(sample.is_empty());
        assert_eq!(sample.len(), 0);
    }
}
