//! Encoding conformance checks.
//!
//! Four checks, run strictly sequentially:
//! - Headers: `Content-Type` charset declaration from a HEAD request
//! - Meta: `<meta>` charset declarations from the fetched markup
//! - Round-trip: UTF-8 encode/decode identity over fixed samples
//! - Detect: statistical encoding detection over the raw body
//!
//! # Graceful Degradation
//!
//! Network-backed checks follow these rules:
//! - Transport fault (connect/timeout/protocol): failed result carrying the
//!   error text, never propagated
//! - Malformed markup: recovered by the parser; missing tags are rule
//!   failures, not errors
//! - Non-2xx status: the response is inspected as-is
//!
//! Checks never panic. A failed network call fails that check only; the
//! remaining checks still run.

pub mod detect;
pub mod headers;
pub mod meta;
pub mod roundtrip;

use crate::fetch::PageFetcher;
use crate::report::TestSuite;

/// Run every check against the target, accumulating into the test suite.
///
/// Each check completes (including its own fetch) before the next begins;
/// no state crosses check boundaries except the accumulated results.
pub fn run_all(fetcher: &PageFetcher, url: &str) -> TestSuite {
    TestSuite {
        http_headers: headers::check(fetcher, url),
        html_meta: meta::check(fetcher, url),
        content_encoding: roundtrip::check(),
        detected_encoding: detect::check(fetcher, url),
    }
}
