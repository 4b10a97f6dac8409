use crate::Result;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Largest sample the API serves in a single request.
pub const MAX_RESULTS_PER_REQUEST: u32 = 5000;

const fn default_results() -> u32 {
    1000
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_top_countries() -> usize {
    15
}

/// Tool configuration, loadable from `demostat.[toml|yml|yaml|json]`.
///
/// All fields are optional in the file; unspecified fields use defaults.
/// Command-line options override whatever is loaded here.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of records to request per sample.
    #[serde(default = "default_results")]
    pub results: u32,

    /// Seed making samples reproducible across runs.
    #[serde(default)]
    pub seed: Option<String>,

    /// Nationality codes restricting the sample (e.g. `["us", "dk"]`).
    #[serde(default)]
    pub nationalities: Vec<String>,

    /// Overrides the public API endpoint.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of countries shown in the console report; 0 shows all.
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results: default_results(),
            seed: None,
            nationalities: Vec::new(),
            api_url: None,
            timeout_secs: default_timeout_secs(),
            top_countries: default_top_countries(),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Path, config_path: Option<&PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading demostat configuration from {}", path.display()))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_dir.join("demostat.toml"),
                base_dir.join("demostat.yml"),
                base_dir.join("demostat.yaml"),
                base_dir.join("demostat.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading demostat configuration from {}", path.display())),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {}", final_path.display()))?,
            "yml" | "yaml" => {
                serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {}", final_path.display()))?
            }
            "json" => {
                serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {}", final_path.display()))?
            }
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Path) -> Result<()> {
        let extension = output_path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {}", output_path.display()))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {}", output_path.display()))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {}", output_path.display()))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {}", output_path.display()))?;
        Ok(())
    }

    /// Collect non-fatal validation warnings.
    pub fn validate(&self, warnings: &mut Vec<String>) {
        if self.results == 0 {
            warnings.push("results is 0; the report will be empty".to_string());
        }

        if self.results > MAX_RESULTS_PER_REQUEST {
            warnings.push(format!(
                "results is {} but the API serves at most {MAX_RESULTS_PER_REQUEST} per request; the excess will not be fetched",
                self.results
            ));
        }

        if self.timeout_secs == 0 {
            warnings.push("timeout_secs is 0; every request will fail immediately".to_string());
        }

        for nat in &self.nationalities {
            if nat.len() != 2 || !nat.chars().all(|c| c.is_ascii_alphabetic()) {
                warnings.push(format!("nationality '{nat}' does not look like a two-letter code"));
            }
        }
    }
}
