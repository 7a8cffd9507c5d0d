//! UTF-8 round-trip check over the fixed samples.
//!
//! Encodes each sample to UTF-8 bytes, decodes them back, and asserts
//! equality with the original text. Independent of the target page; under a
//! correct UTF-8 implementation the round trip is the identity, so this
//! exists as a sanity guard against environment-level encoding
//! misconfiguration rather than as a test of the target.

use std::collections::BTreeMap;

use crate::report::{CheckResult, RoundTripCheck};
use crate::samples::SAMPLES;

/// Run the round-trip check for every sample entry.
///
/// Aggregate success is the logical AND across entries.
pub fn check() -> RoundTripCheck {
    let mut details = BTreeMap::new();

    for sample in &SAMPLES {
        let encoded = sample.text.as_bytes().to_vec();
        let result = match String::from_utf8(encoded) {
            Ok(decoded) if decoded == sample.text => {
                CheckResult::pass("Successfully encoded and decoded")
            }
            Ok(_) => CheckResult::fail("Encoding/decoding mismatch"),
            Err(e) => CheckResult::fail(format!("Encoding error: {}", e)),
        };
        details.insert(sample.language.to_string(), result);
    }

    let success = details.values().all(|result| result.success);
    RoundTripCheck { success, details }
}
