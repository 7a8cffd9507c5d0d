//! Statistical encoding detection.
//!
//! GETs the target and feeds the raw bytes to the detector. The output is
//! informational and passed through unmodified; no pass/fail judgment is
//! applied.

use tracing::info;

use crate::fetch::PageFetcher;
use crate::report::DetectionResult;

/// Run the detector over raw bytes.
///
/// An empty detector charset maps to an absent encoding name.
pub fn evaluate(bytes: &[u8]) -> DetectionResult {
    let (charset, confidence, _language) = chardet::detect(bytes);
    let encoding = if charset.is_empty() {
        None
    } else {
        Some(charset)
    };
    DetectionResult::Detected {
        encoding,
        confidence,
    }
}

/// GET the target and detect its byte encoding.
pub fn check(fetcher: &PageFetcher, url: &str) -> DetectionResult {
    match fetcher.get(url) {
        Ok(body) => {
            info!(url, bytes = body.bytes.len(), "detecting page encoding");
            evaluate(&body.bytes)
        }
        Err(e) => DetectionResult::Error {
            error: e.to_string(),
        },
    }
}
