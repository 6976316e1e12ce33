// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Audits a site's views caching and PageSpeed Insights score
#[derive(Parser)]
#[command(name = "siteaudit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SITEAUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run site audit checks
    Check(CheckArgs),
}

#[derive(clap::Args, Default)]
pub struct CheckArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Include detailed reports and remediation steps
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Views export file or directory (overrides config)
    #[arg(long, value_name = "PATH")]
    pub views_source: Option<PathBuf>,

    /// Page to analyze with PageSpeed Insights
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Google API key for PageSpeed Insights
    #[arg(long, value_name = "KEY", env = "SITEAUDIT_PAGESPEED_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Hide PageSpeed rules with a lower impact
    #[arg(long, value_name = "N")]
    pub impact: Option<f64>,

    /// Maximum URLs listed per PageSpeed rule block (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    // Check enable flags (run only these checks)
    /// Run only the views_cache check
    #[arg(long)]
    pub views_cache: bool,

    /// Run only the pagespeed check
    #[arg(long)]
    pub pagespeed: bool,

    // Check disable flags (skip these checks)
    /// Skip the views_cache check
    #[arg(long)]
    pub no_views_cache: bool,

    /// Skip the pagespeed check
    #[arg(long)]
    pub no_pagespeed: bool,
}

/// Selects checks by name from enable/disable flags.
pub trait CheckFilter {
    /// Get list of explicitly enabled checks.
    fn enabled_checks(&self) -> Vec<String>;

    /// Get list of explicitly disabled checks.
    fn disabled_checks(&self) -> Vec<String>;
}

/// Collect check names from boolean flags.
macro_rules! collect_checks {
    ($self:expr, $($flag:ident => $name:expr),+ $(,)?) => {{
        let mut checks = Vec::new();
        $(
            if $self.$flag {
                checks.push($name.to_string());
            }
        )+
        checks
    }};
}

impl CheckFilter for CheckArgs {
    fn enabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            views_cache => "views_cache",
            pagespeed => "pagespeed",
        )
    }

    fn disabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            no_views_cache => "views_cache",
            no_pagespeed => "pagespeed",
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
