//! HTTP header charset check.
//!
//! HEADs the target and looks for a `charset=utf-8` token in the
//! `Content-Type` header.

use tracing::info;

use crate::fetch::PageFetcher;
use crate::report::CheckResult;

const CHARSET_TOKEN: &str = "charset=utf-8";

/// Evaluate the header rule against an observed `Content-Type` value.
///
/// An absent header is treated as an empty string; the test is a
/// case-insensitive substring match for the literal `charset=utf-8`.
pub fn evaluate(content_type: Option<&str>) -> CheckResult {
    let value = content_type.unwrap_or_default();
    if value.to_lowercase().contains(CHARSET_TOKEN) {
        CheckResult::pass("Content-Type header properly declares UTF-8")
    } else {
        CheckResult::fail("Content-Type header missing charset declaration")
    }
}

/// HEAD the target and evaluate its `Content-Type` header.
pub fn check(fetcher: &PageFetcher, url: &str) -> CheckResult {
    match fetcher.head(url) {
        Ok(observation) => {
            info!(
                url,
                content_type = observation.content_type.as_deref().unwrap_or(""),
                status = observation.status,
                "testing HTTP headers"
            );
            evaluate(observation.content_type.as_deref())
        }
        Err(e) => CheckResult::fail(format!("Error testing HTTP headers: {}", e)),
    }
}
