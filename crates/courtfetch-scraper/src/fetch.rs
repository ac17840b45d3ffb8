//! Document-fetch collaborator
//!
//! Retrieves the bytes of a resolved order/judgment URL so the caller
//! can serve or save them. Outside the extraction core: the scraper
//! only produces URLs, this client consumes them.

use crate::error::Result;
use courtfetch_core::CourtFetchError;
use std::time::Duration;
use tracing::{debug, info};

/// Fixed timeout for document downloads
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for downloading linked documents
pub struct DocumentFetcher {
    client: reqwest::Client,
}

impl DocumentFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| CourtFetchError::Fetch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// GET the document at `url`, returning its raw bytes
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching document: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CourtFetchError::Fetch(format!("GET {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(CourtFetchError::Fetch(format!(
                "GET {} returned status {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CourtFetchError::Fetch(format!("Failed to read body of {}: {}", url, e)))?;

        info!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    /// Suggested filename for a document URL: the last path segment,
    /// or a fallback name when the URL has none
    pub fn filename_from_url(url: &str) -> String {
        let path = url.split('?').next().unwrap_or(url);
        let without_scheme = path.splitn(2, "://").nth(1).unwrap_or(path);
        match without_scheme.split_once('/') {
            Some((_, tail)) => tail
                .rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty())
                .unwrap_or("document.pdf")
                .to_string(),
            None => "document.pdf".to_string(),
        }
    }
}
