// src/fetcher.rs
// =============================================================================
// This module downloads one page per call.
//
// Key behavior:
// - One HTTP GET per URL, no retries
// - Any response status above 299 is an error carrying the status and URL
// - Transport failures (DNS, connection, malformed URL, ...) are passed
//   through from the HTTP client untouched
// =============================================================================

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// A failed page fetch. Fatal only for the branch that requested it.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Network-level failure from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered, but with a status the crawler will not scan.
    #[error("HTTP {status}: {url}")]
    Status { status: StatusCode, url: String },
}

/// Fetches `url` and returns the page body when the response status is at
/// most 299.
///
/// The URL is handed to the client without any pre-validation; malformed
/// URLs (including the relative ones a page may link to) surface as
/// transport errors. On a status error the unread response body is dropped,
/// which releases the connection.
pub async fn fetch(client: &Client, url: &str) -> Result<String, CrawlError> {
    log::debug!("downloading {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if status.as_u16() > 299 {
        return Err(CrawlError::Status {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_embeds_status_and_url() {
        let err = CrawlError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://example.com/missing".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("http://example.com/missing"));
    }
}
