//! HTML meta-tag charset check.
//!
//! GETs the target and inspects two declarations independently: a
//! `<meta charset="...">` element and a
//! `<meta http-equiv="Content-Type" content="...">` element. The aggregate
//! flag is true only when both are valid; the issue list records which of
//! the two rules failed (the flag alone does not distinguish "one missing"
//! from "both missing" — the list does).

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::info;

use crate::fetch::PageFetcher;
use crate::report::CheckResult;

static META_CHARSET: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[charset]").expect("static selector"));
static META_HTTP_EQUIV: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[http-equiv]").expect("static selector"));

/// Evaluate both meta-tag rules against the page markup.
///
/// Each rule inspects the first matching element only. The charset attribute
/// must lower-case to exactly `utf-8`; the content-type `content` attribute
/// must lower-case to something containing `charset=utf-8`.
pub fn evaluate(html: &str) -> CheckResult {
    let document = Html::parse_document(html);
    let mut issues = Vec::new();

    let charset_valid = document
        .select(&META_CHARSET)
        .filter_map(|element| element.value().attr("charset"))
        .next()
        .map(|value| value.to_lowercase() == "utf-8")
        .unwrap_or(false);
    if charset_valid {
        info!("found valid meta charset tag");
    } else {
        issues.push("Missing or invalid meta charset tag".to_string());
    }

    let content_type_valid = document
        .select(&META_HTTP_EQUIV)
        .filter(|element| {
            element
                .value()
                .attr("http-equiv")
                .map(|value| value.eq_ignore_ascii_case("content-type"))
                .unwrap_or(false)
        })
        .filter_map(|element| element.value().attr("content"))
        .next()
        .map(|content| content.to_lowercase().contains("charset=utf-8"))
        .unwrap_or(false);
    if content_type_valid {
        info!("found valid meta content-type tag");
    } else {
        issues.push("Missing or invalid meta content-type tag".to_string());
    }

    if issues.is_empty() {
        CheckResult::pass("HTML meta tags properly declare UTF-8")
    } else {
        CheckResult::issues(issues)
    }
}

/// GET the target and evaluate its meta tags.
pub fn check(fetcher: &PageFetcher, url: &str) -> CheckResult {
    match fetcher.get(url) {
        Ok(body) => {
            info!(url, status = body.status, "testing HTML meta tags");
            evaluate(&String::from_utf8_lossy(&body.bytes))
        }
        Err(e) => CheckResult::fail(format!("Error testing HTML meta tags: {}", e)),
    }
}
