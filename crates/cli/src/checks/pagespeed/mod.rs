// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PageSpeed Insights check.
//!
//! Fetches one analysis for the configured URL and grades its overall
//! score. API errors fail the check and replace the report.

pub mod client;
pub mod report;
pub mod response;

use crate::check::{AuditOptions, Check, Score};
use crate::error::Result;
use crate::markup::Markup;

pub use client::{FetchError, HttpInsights, InsightsSource};
pub use report::ReportFilter;
pub use response::Insights;

/// Scores above this pass.
const PASS_ABOVE: f64 = 80.0;

/// Scores above this (and not passing) warn.
const WARN_ABOVE: f64 = 60.0;

/// What to analyze and how much of the report to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSpeedSettings {
    pub url: Option<String>,
    pub key: Option<String>,
    /// Minimum rule impact shown in the detailed results.
    pub impact: f64,
    /// Maximum URLs listed per block (0 = unlimited).
    pub limit: usize,
}

pub struct PageSpeedCheck {
    settings: PageSpeedSettings,
    options: AuditOptions,
    source: Box<dyn InsightsSource>,
    insights: Option<Insights>,
    errors: Vec<String>,
}

impl PageSpeedCheck {
    pub fn new(
        settings: PageSpeedSettings,
        options: AuditOptions,
        source: Box<dyn InsightsSource>,
    ) -> Self {
        Self {
            settings,
            options,
            source,
            insights: None,
            errors: Vec::new(),
        }
    }

    /// Error lines from the last calculation.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn target(&self) -> Option<(&str, &str)> {
        let url = self.settings.url.as_deref().filter(|u| !u.is_empty())?;
        let key = self.settings.key.as_deref().filter(|k| !k.is_empty())?;
        Some((url, key))
    }

    /// Summary line, followed by the detailed report when verbose.
    fn scored_report(&self) -> Option<String> {
        let insights = self.insights.as_ref()?;
        let markup = self.options.markup;
        let summary = report::summary(insights, markup);
        if !self.options.verbose {
            return Some(summary);
        }

        let filter = ReportFilter {
            impact: self.settings.impact,
            limit: self.settings.limit,
        };
        let details = report::render(insights, filter, markup);
        Some(match markup {
            Markup::Html => format!("<p>{summary}</p>{details}"),
            Markup::Text => format!("{summary}\n{details}"),
        })
    }

    fn fail_with(&mut self, errors: Vec<String>) -> Score {
        for error in &errors {
            tracing::warn!("pagespeed: {}", error);
        }
        self.errors = errors;
        Score::Fail
    }
}

impl Check for PageSpeedCheck {
    fn name(&self) -> &'static str {
        "pagespeed"
    }

    fn label(&self) -> &'static str {
        "PageSpeed Insights report"
    }

    fn description(&self) -> &'static str {
        "Full report at https://developers.google.com/speed/pagespeed/insights"
    }

    fn calculate_score(&mut self) -> Result<Score> {
        self.insights = None;
        self.errors.clear();

        let Some((url, key)) = self.target() else {
            return Ok(Score::Info);
        };
        tracing::debug!("pagespeed: analyzing {}", url);

        let body = match self.source.fetch(url, key) {
            Ok(body) => body,
            Err(e) => return Ok(self.fail_with(vec![e.to_string()])),
        };

        let insights: Insights = match serde_json::from_str(&body) {
            Ok(insights) => insights,
            Err(e) => {
                return Ok(self.fail_with(vec![format!("invalid PageSpeed Insights response: {e}")]));
            }
        };

        if let Some(error) = &insights.error {
            return Ok(self.fail_with(error.describe()));
        }

        let score = if insights.score > PASS_ABOVE {
            Score::Pass
        } else if insights.score > WARN_ABOVE {
            Score::Warn
        } else {
            Score::Error
        };
        tracing::debug!("pagespeed: score {} -> {}", insights.score, score.label());
        self.insights = Some(insights);
        Ok(score)
    }

    fn result_pass(&self) -> Option<String> {
        self.scored_report()
    }

    fn result_warn(&self) -> Option<String> {
        self.scored_report()
    }

    fn result_fail(&self) -> Option<String> {
        if self.errors.is_empty() {
            // Low score rather than an API failure
            return self.scored_report();
        }
        let markup = self.options.markup;
        let errors: Vec<String> = self
            .errors
            .iter()
            .map(|e| markup.value(e).into_owned())
            .collect();
        Some(markup.list(&errors))
    }

    fn result_info(&self) -> Option<String> {
        Some("PageSpeed Insights requires a URL and an API key.".to_string())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
