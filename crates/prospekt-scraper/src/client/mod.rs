//! HTTP client for the brochure listing page.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Upper bound on the TCP/TLS connect phase; the overall request timeout
/// still applies when it is shorter.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fetches listing markup with a bounded request timeout.
///
/// Performs exactly one GET per call. There is no retry: a transport
/// failure or non-2xx status is returned to the caller as-is.
pub struct ProspektClient {
    client: Client,
    timeout_secs: u64,
}

impl ProspektClient {
    /// Creates a `ProspektClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(CONNECT_TIMEOUT_SECS)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// Failures are logged here before being returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] — `url` is not an absolute URL.
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network, TLS, timeout, or body decoding failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        tracing::info!(url, timeout_secs = self.timeout_secs, "fetching listing page");
        let result = self.fetch_page_inner(url).await;
        if let Err(e) = &result {
            tracing::error!(url, error = %e, "error fetching the page");
        }
        result
    }

    async fn fetch_page_inner(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = parse_url(url)?;
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

fn parse_url(url: &str) -> Result<Url, ScraperError> {
    let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
