//! Report data model and JSON persistence.
//!
//! Every type here is immutable once constructed and serializes to the same
//! JSON shape it deserializes from, so a written report file parses back into
//! an equal `Report` value. Non-ASCII text is rendered literally in the file,
//! never `\u`-escaped.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ProbeError;

/// Outcome of a single pass/fail check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub success: bool,
    pub message: CheckMessage,
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        CheckResult {
            success: true,
            message: CheckMessage::Text(message.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        CheckResult {
            success: false,
            message: CheckMessage::Text(message.into()),
        }
    }

    /// Failed result carrying the list of individual rule violations.
    pub fn issues(issues: Vec<String>) -> Self {
        CheckResult {
            success: false,
            message: CheckMessage::Issues(issues),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "PASS" } else { "FAIL" };
        write!(f, "{}: {}", status, self.message)
    }
}

/// Check message: either a single line or a list of issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckMessage {
    Text(String),
    Issues(Vec<String>),
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMessage::Text(s) => write!(f, "{}", s),
            CheckMessage::Issues(list) => write!(f, "{}", list.join("; ")),
        }
    }
}

/// Aggregate round-trip outcome with one result per sample language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTripCheck {
    pub success: bool,
    pub details: BTreeMap<String, CheckResult>,
}

/// Raw detector output, passed through without any pass/fail judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectionResult {
    Detected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        encoding: Option<String>,
        confidence: f32,
    },
    Error {
        error: String,
    },
}

/// The four named observations of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    pub http_headers: CheckResult,
    pub html_meta: CheckResult,
    pub content_encoding: RoundTripCheck,
    pub detected_encoding: DetectionResult,
}

/// Summary counts over the three pass/fail checks (detection is
/// informational and not counted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
}

/// Full probe report, assembled once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    pub timestamp: String,
    pub tests: TestSuite,
}

impl Report {
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();
        for success in [
            self.tests.http_headers.success,
            self.tests.html_meta.success,
            self.tests.content_encoding.success,
        ] {
            if success {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }
}

/// Write the report as pretty-printed UTF-8 JSON.
///
/// Returns the path of the written file. Serialization and write failures
/// propagate; this is the one fatal error path after a run has started.
pub fn write_report(report: &Report, dir: &Path, stamp: &str) -> Result<PathBuf, ProbeError> {
    let path = dir.join(format!("encoding_report_{}.json", stamp));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).map_err(|source| ProbeError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
