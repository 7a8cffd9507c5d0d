//! Unit tests for the pure evaluation rules.
//!
//! These exercise the decision logic directly, without any network: the
//! header rule, the meta-tag rules, the round-trip identity, and the
//! detector pass-through.

use charset_probe::checks::{detect, headers, meta, roundtrip};
use charset_probe::report::{CheckMessage, DetectionResult};
use charset_probe::samples::SAMPLES;
use pretty_assertions::assert_eq;

// Header rule

#[test]
fn header_with_utf8_charset_passes() {
    let result = headers::evaluate(Some("text/html; charset=utf-8"));
    assert!(result.success);
    assert_eq!(
        result.message,
        CheckMessage::Text("Content-Type header properly declares UTF-8".to_string())
    );
}

#[test]
fn header_charset_match_is_case_insensitive() {
    assert!(headers::evaluate(Some("text/html; charset=UTF-8")).success);
    assert!(headers::evaluate(Some("TEXT/HTML; CHARSET=UTF-8")).success);
}

#[test]
fn header_without_charset_fails() {
    let result = headers::evaluate(Some("text/html"));
    assert!(!result.success);
    assert_eq!(
        result.message,
        CheckMessage::Text("Content-Type header missing charset declaration".to_string())
    );
}

#[test]
fn absent_header_fails() {
    assert!(!headers::evaluate(None).success);
}

#[test]
fn header_with_other_charset_fails() {
    assert!(!headers::evaluate(Some("text/html; charset=iso-8859-1")).success);
}

// Meta-tag rules

const VALID_META: &str = r#"<html><head>
<meta charset="utf-8">
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
</head><body></body></html>"#;

#[test]
fn both_meta_tags_valid_passes() {
    let result = meta::evaluate(VALID_META);
    assert!(result.success);
    assert_eq!(
        result.message,
        CheckMessage::Text("HTML meta tags properly declare UTF-8".to_string())
    );
}

#[test]
fn meta_charset_attribute_is_case_insensitive() {
    let html = r#"<head>
<meta charset="UTF-8">
<meta http-equiv="content-type" content="text/html; CHARSET=UTF-8">
</head>"#;
    assert!(meta::evaluate(html).success);
}

#[test]
fn missing_content_type_tag_lists_one_issue() {
    let result = meta::evaluate(r#"<head><meta charset="utf-8"></head>"#);
    assert!(!result.success);
    assert_eq!(
        result.message,
        CheckMessage::Issues(vec![
            "Missing or invalid meta content-type tag".to_string()
        ])
    );
}

#[test]
fn missing_both_tags_lists_two_issues() {
    let result = meta::evaluate("<html><head><title>t</title></head></html>");
    assert!(!result.success);
    assert_eq!(
        result.message,
        CheckMessage::Issues(vec![
            "Missing or invalid meta charset tag".to_string(),
            "Missing or invalid meta content-type tag".to_string(),
        ])
    );
}

#[test]
fn wrong_meta_charset_value_fails() {
    let result = meta::evaluate(
        r#"<head>
<meta charset="iso-8859-1">
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
</head>"#,
    );
    assert!(!result.success);
    assert_eq!(
        result.message,
        CheckMessage::Issues(vec!["Missing or invalid meta charset tag".to_string()])
    );
}

#[test]
fn first_matching_meta_tag_wins() {
    // A later, valid charset tag does not rescue an invalid first one.
    let result = meta::evaluate(
        r#"<head>
<meta charset="iso-8859-1">
<meta charset="utf-8">
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
</head>"#,
    );
    assert!(!result.success);
}

#[test]
fn malformed_markup_is_recovered_not_fatal() {
    let result = meta::evaluate("<meta charset=\"utf-8\"<div><<<>");
    // No panic; the rule still evaluates over whatever parsed.
    assert!(matches!(
        result.message,
        CheckMessage::Text(_) | CheckMessage::Issues(_)
    ));
}

// Round-trip identity

#[test]
fn all_samples_round_trip() {
    let result = roundtrip::check();
    assert!(result.success);
    assert_eq!(result.details.len(), SAMPLES.len());
    for (language, entry) in &result.details {
        assert!(entry.success, "sample {} failed round trip", language);
        assert_eq!(
            entry.message,
            CheckMessage::Text("Successfully encoded and decoded".to_string())
        );
    }
}

#[test]
fn samples_cover_expected_languages() {
    let result = roundtrip::check();
    for language in [
        "Japanese",
        "Korean",
        "Russian",
        "Chinese",
        "Vietnamese",
        "Special",
    ] {
        assert!(result.details.contains_key(language));
    }
}

// Detector pass-through

#[test]
fn detector_handles_utf8_bytes() {
    let sample = "開発者向けのツール каждый 🔧".as_bytes();
    match detect::evaluate(sample) {
        DetectionResult::Detected {
            encoding,
            confidence,
        } => {
            assert!(encoding.is_some());
            assert!((0.0..=1.0).contains(&confidence));
        }
        DetectionResult::Error { .. } => panic!("detector returned an error"),
    }
}

#[test]
fn detector_handles_legacy_single_byte_input() {
    // "café" in latin-1; invalid as UTF-8.
    let bytes = [0x63, 0x61, 0x66, 0xe9, 0x20, 0x74, 0x65, 0x78, 0x74];
    match detect::evaluate(&bytes) {
        DetectionResult::Detected { confidence, .. } => {
            assert!((0.0..=1.0).contains(&confidence));
        }
        DetectionResult::Error { .. } => panic!("detector returned an error"),
    }
}

#[test]
fn detector_handles_empty_input() {
    // Must not panic; any structured answer is acceptable.
    let _ = detect::evaluate(&[]);
}
