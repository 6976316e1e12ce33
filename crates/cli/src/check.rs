// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check contract and result types for output formatting.

use serde::Serialize;

use crate::error::Result;
use crate::markup::Markup;

/// Score assigned to a check after calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Pass,
    Warn,
    Fail,
    Info,
    /// Worse than a warning but not an outright failure (e.g. a low
    /// PageSpeed score). Rendered with the fail report.
    Error,
}

impl Score {
    /// Upper-case status label used in text output.
    pub fn label(self) -> &'static str {
        match self {
            Score::Pass => "PASS",
            Score::Warn => "WARN",
            Score::Fail => "FAIL",
            Score::Info => "INFO",
            Score::Error => "ERROR",
        }
    }

    /// Lower-case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Score::Pass => "pass",
            Score::Warn => "warn",
            Score::Fail => "fail",
            Score::Info => "info",
            Score::Error => "error",
        }
    }

    /// Whether this score should fail the run.
    pub fn is_failure(self) -> bool {
        matches!(self, Score::Fail | Score::Error)
    }
}

/// Rendering options handed to every check when it is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Include detailed report sections and remediation steps.
    pub verbose: bool,
    /// Markup used by report strings.
    pub markup: Markup,
}

/// A single site audit check.
///
/// The runner calls [`Check::calculate_score`] once, then asks for the
/// report string matching the score. State computed during the calculation
/// lives on the check and is rebuilt on every call.
pub trait Check: Send {
    /// Unique identifier for this check (e.g., "views_cache").
    fn name(&self) -> &'static str;

    /// Short human-readable label.
    fn label(&self) -> &'static str;

    /// One-line description of what is being audited.
    fn description(&self) -> &'static str;

    /// Inspect the input and compute a score.
    ///
    /// Problems with the audited site are expressed through the score.
    /// `Err` is reserved for input the check cannot read at all.
    fn calculate_score(&mut self) -> Result<Score>;

    fn result_pass(&self) -> Option<String>;

    fn result_warn(&self) -> Option<String>;

    fn result_fail(&self) -> Option<String>;

    fn result_info(&self) -> Option<String>;

    /// Remediation advice, if any applies to the last calculated score.
    fn action(&self) -> Option<String> {
        None
    }
}

/// Report string for `score`.
pub fn report_for(check: &dyn Check, score: Score) -> Option<String> {
    match score {
        Score::Pass => check.result_pass(),
        Score::Warn => check.result_warn(),
        Score::Info => check.result_info(),
        Score::Fail | Score::Error => check.result_fail(),
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "views_cache", "pagespeed").
    pub name: String,

    pub label: String,

    pub description: String,

    /// Calculated score (absent when the check was skipped).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,

    /// True if the check could not run.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    /// Error message if the check was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Report string for the score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Remediation advice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Wall-clock time spent in the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl CheckResult {
    /// Build a result from a check whose score has been calculated.
    pub fn scored(check: &dyn Check, score: Score) -> Self {
        Self {
            name: check.name().to_string(),
            label: check.label().to_string(),
            description: check.description().to_string(),
            score: Some(score),
            skipped: false,
            error: None,
            message: report_for(check, score),
            action: check.action(),
            duration_ms: None,
        }
    }

    /// Create a skipped check result with an error.
    pub fn skipped(check: &dyn Check, error: impl Into<String>) -> Self {
        Self {
            name: check.name().to_string(),
            label: check.label().to_string(),
            description: check.description().to_string(),
            score: None,
            skipped: true,
            error: Some(error.into()),
            message: None,
            action: None,
            duration_ms: None,
        }
    }

    /// Whether the result should fail the run.
    pub fn is_failure(&self) -> bool {
        self.score.is_some_and(Score::is_failure)
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// RFC 3339 timestamp.
    pub timestamp: String,

    /// Whether no check scored FAIL or ERROR.
    pub passed: bool,

    /// Results for each check.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, checks: Vec<CheckResult>) -> Self {
        // Skipped checks do not fail the run
        let passed = !checks.iter().any(CheckResult::is_failure);
        Self {
            timestamp,
            passed,
            checks,
        }
    }

    /// Number of results with the given score.
    pub fn count(&self, score: Score) -> usize {
        self.checks.iter().filter(|c| c.score == Some(score)).count()
    }

    /// Number of skipped checks.
    pub fn skipped(&self) -> usize {
        self.checks.iter().filter(|c| c.skipped).count()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
