// src/source/client.rs
use crate::source::config::FetchConfig;
use crate::utils::error::{AttemptFailure, FetchError};
use reqwest::{header, StatusCode};
use std::path::Path;

/// Creates a reqwest client with the configured User-Agent and per-request timeout.
fn build_client(config: &FetchConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
}

/// Returns the raw HTML for `source`.
///
/// An existing local file is read as UTF-8. Anything else is treated as a URL
/// and fetched with retries.
pub async fn load(source: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let path = Path::new(source);
    if path.is_file() {
        tracing::info!("Reading local document: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::Io { path: path.to_path_buf(), source: e })?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        return Ok(content);
    }

    fetch_with_retry(source, config).await
}

/// GETs `url`, retrying non-200 responses and transport errors with linear backoff.
pub async fn fetch_with_retry(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let client = build_client(config).map_err(FetchError::Client)?;
    let attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    tracing::info!("Downloading document from: {}", url);
    tracing::debug!("Using User-Agent: {}", config.user_agent);

    loop {
        match fetch_once(&client, url).await {
            Ok(body) => {
                tracing::debug!("Downloaded {} bytes from {} on attempt {}", body.len(), url, attempt);
                return Ok(body);
            }
            Err(failure) if attempt < attempts => {
                let delay = config.backoff_for(attempt);
                tracing::warn!(
                    "Attempt {}/{} for {} failed ({}), retrying in {:?}",
                    attempt, attempts, url, failure, delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(failure) => {
                tracing::error!("Attempt {}/{} for {} failed ({}), giving up", attempt, attempts, url, failure);
                return Err(FetchError::Exhausted {
                    url: url.to_string(),
                    attempts,
                    last: failure,
                });
            }
        }
    }
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<String, AttemptFailure> {
    let response = client
        .get(url)
        .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AttemptFailure::Status(status));
    }

    Ok(response.text().await?)
}
