//! Page fetching from URLs and local files.
//!
//! The pipeline only depends on the [`Fetcher`] trait; [`HttpFetcher`] is the
//! network-backed implementation built on [`fetch_url`].

use std::fs;
use std::path::PathBuf;

use crate::{MetricsError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 20,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

/// Source of raw page markup for a URL.
pub trait Fetcher {
    /// Returns the page markup, or an error when the page is unavailable.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches HTML content from a URL.
///
/// Follows redirects and respects the configured timeout. Any status other
/// than 2xx is reported as [`MetricsError::HttpStatus`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    let parsed_url = url::Url::parse(url).map_err(|e| MetricsError::InvalidUrl(e.to_string()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(MetricsError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MetricsError::Timeout { timeout: config.timeout }
            } else {
                MetricsError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MetricsError::HttpStatus { url: url.to_string(), status: status.as_u16() });
    }

    Ok(response.text().await?)
}

/// [`Fetcher`] backed by reqwest.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        fetch_url(url, &self.config).await
    }
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MetricsError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(MetricsError::from)
    }
}
