//! Reading article input from URLs, files and stdin.
//!
//! Published pages are fetched over HTTP(S) for the audit; article documents
//! and saved pages are read from disk or piped in.

use std::fs;
use std::path::Path;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{Result, SeoError};

/// HTTP client settings for page fetching.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: concat!("Mozilla/5.0 (compatible; seoscore/", env!("CARGO_PKG_VERSION"), ")").to_string() }
    }
}

/// Parses a page address and rejects anything that is not `http` or `https`.
pub fn parse_page_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| SeoError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(SeoError::InvalidUrl(format!("unsupported scheme {:?}, expected http or https", other))),
    }
}

/// Fetches a page and returns its body as text.
///
/// Redirects are followed. A request that exceeds `config.timeout` fails with
/// [`SeoError::Timeout`], other transport failures and non-success statuses
/// with [`SeoError::HttpError`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_page_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.as_str())
        .build()?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "pl-PL,pl;q=0.9,en;q=0.5")
        .send()
        .await
        .map_err(|e| if e.is_timeout() { SeoError::Timeout { timeout: config.timeout } } else { SeoError::HttpError(e) })?
        .error_for_status()?;

    Ok(response.text().await?)
}

/// Reads a local file into a string.
pub fn fetch_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SeoError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Reads standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
