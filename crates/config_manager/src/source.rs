//! Document sources.
//!
//! Configuration and governance documents are referenced either by a local
//! filesystem path or by an `http://` / `https://` URL. The
//! [`DocumentSource`] trait abstracts retrieval of the raw text so the loader
//! can be exercised without touching the network.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;

/// Retrieves the raw text of a document given its reference.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Returns the text content of the document at `reference`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Fetch`] when a remote document cannot be retrieved
    /// - [`ConfigurationError::FileAccessError`] when a local file cannot be read
    async fn fetch_text(&self, reference: &str) -> ConfigurationResult<String>;
}

/// Reads local files from disk and remote documents over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct DefaultDocumentSource {
    client: reqwest::Client,
}

impl DefaultDocumentSource {
    /// Creates a source backed by a default `reqwest` client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that uses the supplied HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentSource for DefaultDocumentSource {
    #[instrument(skip(self))]
    async fn fetch_text(&self, reference: &str) -> ConfigurationResult<String> {
        if is_remote(reference) {
            debug!(url = reference, "Fetching remote document");
            let fetch_error = |reason: String| ConfigurationError::Fetch {
                location: reference.to_string(),
                reason,
            };

            let response = self
                .client
                .get(reference)
                .send()
                .await
                .map_err(|e| fetch_error(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(fetch_error(format!("HTTP status {status}")));
            }

            response.text().await.map_err(|e| fetch_error(e.to_string()))
        } else {
            debug!(path = reference, "Reading local document");
            tokio::fs::read_to_string(reference)
                .await
                .map_err(|e| ConfigurationError::FileAccessError {
                    path: reference.to_string(),
                    reason: e.to_string(),
                })
        }
    }
}

/// Returns `true` when `reference` is an HTTP(S) URL rather than a local path.
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolves the `reference` found in the document at `including`.
///
/// - Absolute URLs are returned unchanged.
/// - A relative reference inside a remote document is joined onto that
///   document's URL.
/// - References inside a local document are used as given, so relative paths
///   resolve against the working directory like every other configured path.
///
/// # Examples
///
/// ```rust
/// use config_manager::resolve_reference;
///
/// assert_eq!(resolve_reference("configs/repo.yaml", "configs/base.yaml"), "configs/base.yaml");
/// assert_eq!(
///     resolve_reference("https://example.com/cfg/repo.yaml", "../base.yaml"),
///     "https://example.com/base.yaml"
/// );
/// ```
pub fn resolve_reference(including: &str, reference: &str) -> String {
    if is_remote(reference) || !is_remote(including) {
        return reference.to_string();
    }

    Url::parse(including)
        .and_then(|base| base.join(reference))
        .map(|url| url.to_string())
        .unwrap_or_else(|_| reference.to_string())
}

/// Converts a GitHub UI link into one that serves the raw file.
///
/// Local paths, `raw.githubusercontent.com` URLs and URLs that already ask for
/// `raw=true` are returned unchanged. Any other URL gets `raw=true` appended
/// to its query string.
///
/// # Examples
///
/// ```rust
/// use config_manager::to_raw_url;
///
/// assert_eq!(
///     to_raw_url("https://github.com/org/gov/blob/main/governance.yaml"),
///     "https://github.com/org/gov/blob/main/governance.yaml?raw=true"
/// );
/// assert_eq!(to_raw_url("governance.yaml"), "governance.yaml");
/// ```
pub fn to_raw_url(link: &str) -> String {
    if !is_remote(link) {
        return link.to_string();
    }

    if link.contains("raw.githubusercontent.com") || link.contains("?raw=true") {
        return link.to_string();
    }

    if link.contains('?') {
        format!("{link}&raw=true")
    } else {
        format!("{link}?raw=true")
    }
}
