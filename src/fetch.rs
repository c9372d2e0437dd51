use crate::config::HttpConfig;
use crate::error::{Result, WowError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// The feeds only answer with XML for browser-like clients that ask for it.
const ACCEPT_XML: &str = "application/xml, text/xml";

/// Source of raw response bodies.
pub trait Fetcher {
    /// GET `path` on `host` with the given query parameters and return the body.
    fn fetch(&self, host: &str, path: &str, query: &[(&str, &str)]) -> Result<String>;
}

/// Blocking HTTP fetcher backed by reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_XML));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                WowError::Config(format!("Invalid user agent '{}': {}", config.user_agent, e))
            })?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, host: &str, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("http://{host}{path}");
        debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(query).send()?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "response");

        if !status.is_success() {
            return Err(WowError::HttpStatus {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!(bytes = body.len(), "read body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_default_config() {
        assert!(HttpFetcher::new(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_unprintable_user_agent() {
        let config = HttpConfig {
            user_agent: "bad\nagent".to_string(),
            ..HttpConfig::default()
        };
        assert!(matches!(HttpFetcher::new(&config), Err(WowError::Config(_))));
    }
}
