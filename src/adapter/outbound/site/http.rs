//! HTTP fetching shared by bookmaker sites.

use std::time::Duration;

use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::settings::HttpConfig;
use crate::error::SiteError;

/// Thin wrapper over `reqwest` with timeouts and retry on transient errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: HttpClient,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpFetcher {
    #[must_use]
    pub fn from_config(config: &HttpConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// GET a page body as text.
    pub async fn get_text(&self, url: &Url) -> Result<String, SiteError> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            debug!(url = %url, attempt, "GET");
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(SiteError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            match response.text().await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    /// GET a JSON document.
    pub async fn get_json<T>(&self, url: &Url) -> Result<T, SiteError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms * u64::from(attempt))).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let fetcher = HttpFetcher::from_config(&HttpConfig {
            timeout_ms: 500,
            connect_timeout_ms: 500,
            retry_max_attempts: 2,
            retry_backoff_ms: 0,
            ..HttpConfig::default()
        });
        let url = Url::parse("http://127.0.0.1:9/listing").unwrap();

        let result = fetcher.get_text(&url).await;
        assert!(matches!(result, Err(SiteError::Http(_))));
    }
}
