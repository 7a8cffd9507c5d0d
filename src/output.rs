//! Output formatting for the probe summary.
//!
//! Provides terminal and JSON formatters. The terminal formatter prints one
//! PASS/FAIL line per check plus the detector observation; the JSON
//! formatter emits the full report, non-ASCII rendered literally.
//! Formatters never fail for any report value.

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::report::{CheckMessage, CheckResult, DetectionResult, Report};

/// Trait for report formatters.
pub trait OutputFormatter {
    fn format(&self, report: &Report) -> String;
}

/// Human-readable terminal formatter.
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        TerminalFormatter { color }
    }

    fn status(&self, result: &CheckResult) -> String {
        match (result.success, self.color) {
            (true, true) => "[PASS]".green().to_string(),
            (true, false) => "[PASS]".to_string(),
            (false, true) => "[FAIL]".red().to_string(),
            (false, false) => "[FAIL]".to_string(),
        }
    }

    fn check_line(&self, name: &str, result: &CheckResult) -> String {
        let message = match &result.message {
            CheckMessage::Text(text) => text.clone(),
            CheckMessage::Issues(list) => list.join("; "),
        };
        format!("  {} {}: {}\n", self.status(result), name, message)
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &Report) -> String {
        let mut out = String::new();

        out.push_str("=== Encoding Test Results ===\n");
        out.push_str(&format!("URL: {}\n", report.url));
        out.push_str(&format!("Timestamp: {}\n\n", report.timestamp));

        out.push_str(&self.check_line("http_headers", &report.tests.http_headers));
        out.push_str(&self.check_line("html_meta", &report.tests.html_meta));

        let roundtrip = &report.tests.content_encoding;
        let roundtrip_line = if roundtrip.success {
            CheckResult::pass(format!("all {} samples round-tripped", roundtrip.details.len()))
        } else {
            let failures: Vec<String> = roundtrip
                .details
                .iter()
                .filter(|(_, result)| !result.success)
                .map(|(language, _)| language.clone())
                .collect();
            CheckResult::fail(format!("round-trip failed for: {}", failures.join(", ")))
        };
        out.push_str(&self.check_line("content_encoding", &roundtrip_line));

        match &report.tests.detected_encoding {
            DetectionResult::Detected {
                encoding,
                confidence,
            } => {
                out.push_str(&format!(
                    "  detected_encoding: {} (confidence {:.2})\n",
                    encoding.as_deref().unwrap_or("unknown"),
                    confidence
                ));
            }
            DetectionResult::Error { error } => {
                out.push_str(&format!("  detected_encoding: error: {}\n", error));
            }
        }

        let summary = report.summary();
        out.push_str(&format!(
            "\nSUMMARY: {} passed, {} failed\n",
            summary.passed, summary.failed
        ));
        out.push_str("Detailed report saved to the encoding_report_*.json file");

        out
    }
}

/// JSON formatter emitting the full report.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        // Serialization of the report model cannot fail; fall back to an
        // empty object rather than panicking.
        serialized.unwrap_or_else(|_| "{}".to_string())
    }
}

/// Get a formatter for the selected output format.
pub fn get_formatter(format: &OutputFormat, no_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
