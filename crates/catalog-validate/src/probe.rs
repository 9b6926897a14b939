//! URL reachability probing.
//!
//! [`UrlProbe`] is the only blocking external I/O in a validation run. The
//! HTTP implementation issues a `HEAD` request following redirects with a
//! bounded timeout; no retries.

use std::time::Duration;

use catalog_model::UrlRules;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::error::{Result, ValidateError};

const MAX_REDIRECTS: usize = 10;

/// What happened when a URL was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with this HTTP status.
    Status(u16),
    /// No answer within the timeout.
    Timeout,
    /// The server could not be reached.
    ConnectionFailed,
    /// Any other request failure.
    Failed(String),
    /// No request was made.
    Skipped,
}

/// Checks whether a well-formed URL is reachable.
pub trait UrlProbe: Send + Sync {
    fn probe(&self, url: &Url) -> ProbeOutcome;
}

/// Probes URLs over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(rules: &UrlRules) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(rules.timeout_secs))
            .user_agent(rules.user_agent.clone())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(ValidateError::HttpClient)?;
        Ok(Self { client })
    }
}

impl UrlProbe for HttpProbe {
    fn probe(&self, url: &Url) -> ProbeOutcome {
        match self.client.head(url.as_str()).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url = %url, status, "url probed");
                ProbeOutcome::Status(status)
            }
            Err(err) if err.is_timeout() => ProbeOutcome::Timeout,
            Err(err) if err.is_connect() => ProbeOutcome::ConnectionFailed,
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        }
    }
}

/// Skips the network entirely; only URL syntax is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOnlyProbe;

impl UrlProbe for FormatOnlyProbe {
    fn probe(&self, _url: &Url) -> ProbeOutcome {
        ProbeOutcome::Skipped
    }
}
