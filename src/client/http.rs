//! HTTP job source.
//!
//! Issues the one supported request, `GET {base_url}/jobs`, with an
//! `Accept: application/json` header and the static `x_token` header, then decodes
//! the body atomically with [`decode_batch`].
//!
//! There is no retry, no timeout override and no transport-level pagination: the
//! whole corpus arrives in one response.

use super::source::JobSource;
use crate::domain::{decode_batch, FetchError, Job, JobBoardError, Result};
use crate::ApiConfig;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT};
use url::Url;

/// Header carrying the static API token.
pub const TOKEN_HEADER: &str = "x_token";

/// Path appended to the base URL.
const JOBS_PATH: &str = "jobs";

/// Blocking HTTP client for the job listing API.
///
/// Meant to run on the worker thread; calls block until the request completes.
#[derive(Debug, Clone)]
pub struct HttpJobSource {
    client: Client,
    endpoint: Url,
    token: String,
}

impl HttpJobSource {
    /// Builds a source from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] if the base URL does not parse or the
    /// token is not a valid header value.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = jobs_endpoint(&config.base_url)?;

        HeaderValue::from_str(&config.token)
            .map_err(|e| JobBoardError::Config(format!("api token is not a valid header: {e}")))?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JobBoardError::Config(format!("failed to build http client: {e}")))?;

        tracing::debug!(endpoint = %endpoint, "http job source ready");

        Ok(Self {
            client,
            endpoint,
            token: config.token.clone(),
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Joins the jobs path onto the base URL, tolerating a trailing slash.
fn jobs_endpoint(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|e| JobBoardError::Config(format!("invalid base url `{base_url}`: {e}")))?;

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(JOBS_PATH)
        .map_err(|e| JobBoardError::Config(format!("invalid base url `{base_url}`: {e}")))
}

impl JobSource for HttpJobSource {
    #[tracing::instrument(level = "debug", skip(self), fields(endpoint = %self.endpoint))]
    fn fetch_jobs(&self) -> std::result::Result<Vec<Job>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .map_err(|e| {
                tracing::warn!(error = %e, "job fetch request failed");
                FetchError::NetworkFailure(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "job fetch response received");

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::NetworkFailure(e.to_string()))?;

        let jobs = decode_batch(&body).map_err(|e| {
            tracing::warn!(error = %e, body_len = body.len(), "job payload rejected");
            e
        })?;

        tracing::debug!(job_count = jobs.len(), "job batch decoded");
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_jobs_path() {
        assert_eq!(
            jobs_endpoint("https://myfirstapi.website").unwrap().as_str(),
            "https://myfirstapi.website/jobs"
        );
        assert_eq!(
            jobs_endpoint("http://127.0.0.1:8080/api/").unwrap().as_str(),
            "http://127.0.0.1:8080/api/jobs"
        );
        assert_eq!(
            jobs_endpoint("http://127.0.0.1:8080/api").unwrap().as_str(),
            "http://127.0.0.1:8080/api/jobs"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            token: String::new(),
        };
        assert!(matches!(HttpJobSource::new(&config), Err(JobBoardError::Config(_))));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let config = ApiConfig {
            base_url: "https://myfirstapi.website".to_string(),
            token: "abc\ndef".to_string(),
        };
        assert!(matches!(HttpJobSource::new(&config), Err(JobBoardError::Config(_))));
    }
}
