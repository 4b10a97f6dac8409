use super::{ApiResponse, Sample};
use crate::Result;
use chrono::Utc;
use core::time::Duration;
use ohno::IntoAppError;
use std::sync::LazyLock;
use url::Url;

const LOG_TARGET: &str = "    sample";

static DEFAULT_API_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("https://randomuser.me/api/").expect("invalid DEFAULT_API_URL"));

/// Fields requested from the API. Restricting the payload keeps the response
/// small; the wire model ignores anything else anyway.
const INCLUDED_FIELDS: &str = "gender,dob,location,registered";

/// Parameters for a single sample fetch.
#[derive(Debug, Clone)]
pub struct SampleRequest {
    /// Number of records to request.
    pub results: u32,

    /// Seed making the sample reproducible across runs.
    pub seed: Option<String>,

    /// Nationality codes (e.g. `us`, `dk`) restricting the sample.
    pub nationalities: Vec<String>,
}

/// Issues sample requests against the Random User Generator API.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: Url,
}

impl Provider {
    /// Create a new sample provider.
    ///
    /// `base_url` overrides the public endpoint; tests point it at a mock
    /// server.
    pub fn new(base_url: Option<&Url>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("demostat")
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.cloned().unwrap_or_else(|| DEFAULT_API_URL.clone()),
        })
    }

    /// Fetch one sample of user records.
    ///
    /// A non-success status or an undecodable body is an error; the caller
    /// decides how to surface it. Prior output (if any) is never touched.
    pub async fn fetch_sample(&self, request: &SampleRequest) -> Result<Sample> {
        let url = build_url(&self.base_url, request);

        log::info!(target: LOG_TARGET, "Requesting {} record(s) from {}", request.results, self.base_url);
        let start_time = std::time::Instant::now();

        let response = self.client.get(url).send().await.into_app_err("could not reach the sample API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::from("<unable to read body>"));
            log::debug!(target: LOG_TARGET, "Response body (first 500 chars): {}", body.chars().take(500).collect::<String>());
            return Err(ohno::app_err!("sample API returned HTTP {status}"));
        }

        let text = response.text().await.into_app_err("could not read the sample API response")?;
        let body: ApiResponse = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Response body (first 500 chars): {}", text.chars().take(500).collect::<String>());
                return Err(e).into_app_err("could not decode the sample API response");
            }
        };

        if body.results.len() != request.results as usize {
            log::warn!(
                target: LOG_TARGET,
                "Requested {} record(s) but received {}",
                request.results,
                body.results.len()
            );
        }

        log::debug!(
            target: LOG_TARGET,
            "Fetched {} record(s) (seed '{}') in {:.3}s",
            body.results.len(),
            body.info.seed,
            start_time.elapsed().as_secs_f64()
        );

        Ok(Sample {
            records: body.results,
            info: body.info,
            fetched_at: Utc::now(),
        })
    }
}

fn build_url(base_url: &Url, request: &SampleRequest) -> Url {
    let mut url = base_url.clone();

    {
        let mut pairs = url.query_pairs_mut();
        let _ = pairs.append_pair("results", &request.results.to_string());
        let _ = pairs.append_pair("inc", INCLUDED_FIELDS);

        if let Some(seed) = &request.seed {
            let _ = pairs.append_pair("seed", seed);
        }

        if !request.nationalities.is_empty() {
            let _ = pairs.append_pair("nat", &request.nationalities.join(","));
        }
    }

    url
}
