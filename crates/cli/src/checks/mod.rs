// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.
//!
//! Both built-in checks are registered here, in canonical order:
//! - views_cache: query results caching across views
//! - pagespeed: PageSpeed Insights score and report

pub mod pagespeed;
pub mod views;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::check::{AuditOptions, Check};
use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::markup::Markup;
use pagespeed::{HttpInsights, InsightsSource, PageSpeedCheck, PageSpeedSettings};
use views::{ViewsCacheCheck, ViewsInput};

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["views_cache", "pagespeed"];

/// Resolved inputs for every check, after merging config and flags.
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub options: AuditOptions,
    /// Views export; `None` leaves the views check unconfigured.
    pub views_source: Option<PathBuf>,
    pub pagespeed: PageSpeedSettings,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            options: AuditOptions::default(),
            views_source: None,
            pagespeed: PageSpeedSettings::default(),
            endpoint: pagespeed::client::DEFAULT_ENDPOINT.to_string(),
            timeout: pagespeed::client::DEFAULT_TIMEOUT,
        }
    }
}

impl AuditSettings {
    /// Merge config file values with command-line flags; flags win.
    ///
    /// Relative views sources from the config resolve against `config_dir`,
    /// those given on the command line against `cwd`.
    pub fn resolve(
        config: &Config,
        config_dir: &Path,
        cwd: &Path,
        args: &CheckArgs,
    ) -> Result<Self> {
        let markup = match args.output {
            OutputFormat::Html => Markup::Html,
            OutputFormat::Text | OutputFormat::Json => Markup::Text,
        };

        let views_source = match &args.views_source {
            Some(path) => Some(cwd.join(path)),
            None => config.views_source(config_dir),
        };

        let file = &config.check.pagespeed;
        let impact = args.impact.unwrap_or(file.impact);
        if !impact.is_finite() || impact < 0.0 {
            return Err(Error::Argument(format!(
                "impact must be a non-negative number, got {impact}"
            )));
        }

        let defaults = Self::default();
        Ok(Self {
            options: AuditOptions {
                verbose: args.verbose,
                markup,
            },
            views_source,
            pagespeed: PageSpeedSettings {
                url: args.url.clone().or_else(|| file.url.clone()),
                key: args.key.clone().or_else(|| file.key.clone()),
                impact,
                limit: args.limit.unwrap_or(file.limit),
            },
            endpoint: file.endpoint.clone().unwrap_or(defaults.endpoint),
            timeout: file.timeout.unwrap_or(defaults.timeout),
        })
    }
}

/// Create all registered checks against the live PageSpeed API.
pub fn all_checks(settings: &AuditSettings) -> Vec<Box<dyn Check>> {
    let source = HttpInsights::new(settings.endpoint.clone(), settings.timeout);
    all_checks_with_source(settings, Box::new(source))
}

/// Create all registered checks with a custom PageSpeed source.
pub fn all_checks_with_source(
    settings: &AuditSettings,
    source: Box<dyn InsightsSource>,
) -> Vec<Box<dyn Check>> {
    let views = match &settings.views_source {
        Some(path) => ViewsInput::Source(path.clone()),
        None => ViewsInput::Unconfigured,
    };
    vec![
        Box::new(ViewsCacheCheck::new(views, settings.options)),
        Box::new(PageSpeedCheck::new(
            settings.pagespeed.clone(),
            settings.options,
            source,
        )),
    ]
}

/// Filter checks based on enabled/disabled flags.
///
/// - No flags: every check
/// - `--<check>`: only the named checks
/// - `--no-<check>`: all except the named checks
pub fn filter_checks(
    checks: Vec<Box<dyn Check>>,
    enabled: &[String],
    disabled: &[String],
) -> Vec<Box<dyn Check>> {
    checks
        .into_iter()
        .filter(|c| {
            if !enabled.is_empty() {
                enabled.iter().any(|e| e == c.name())
            } else {
                !disabled.iter().any(|d| d == c.name())
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
