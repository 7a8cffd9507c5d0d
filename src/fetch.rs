//! Blocking HTTP collaborator.
//!
//! Thin wrapper over `reqwest::blocking` issuing one HEAD or GET per call.
//! No retries; the configured timeout applies to each request. Non-2xx
//! statuses are not treated as faults here — checks inspect whatever the
//! server returned.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::ProbeError;

/// Headers observed from a HEAD response.
#[derive(Debug, Clone)]
pub struct HeaderObservation {
    pub status: u16,
    pub content_type: Option<String>,
}

/// Raw body observed from a GET response.
#[derive(Debug, Clone)]
pub struct PageBody {
    pub status: u16,
    pub bytes: Vec<u8>,
}

/// Blocking page fetcher shared by all network-backed checks.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout_ms: u64) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(PageFetcher { client })
    }

    /// Issue a HEAD request and extract the `Content-Type` header.
    pub fn head(&self, url: &str) -> Result<HeaderObservation, reqwest::Error> {
        let response = self.client.head(url).send()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Ok(HeaderObservation {
            status: response.status().as_u16(),
            content_type,
        })
    }

    /// Issue a GET request and return the raw response body.
    pub fn get(&self, url: &str) -> Result<PageBody, reqwest::Error> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let bytes = response.bytes()?.to_vec();
        Ok(PageBody { status, bytes })
    }
}
