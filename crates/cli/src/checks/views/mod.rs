// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Views query results caching check.
//!
//! Flags views whose enabled displays do not cache raw query results.
//! Passes when every view caches, fails when none does, warns otherwise.

pub mod lifespan;
pub mod model;
pub mod source;

use std::path::PathBuf;

use crate::check::{AuditOptions, Check, Score};
use crate::error::Result;

pub use lifespan::{CacheRegistry, Lifespan, ViewLifespans};
pub use model::{CacheBlock, CacheOptions, Display, DisplayOptions, View};

const REMEDIATION_STEPS: &[&str] = &[
    "Go to /admin/structure/views/",
    "Edit the View in question",
    "Select the Display",
    "Click Advanced",
    "Next to Caching, click to edit.",
    "Query results: (something other than Never cache)",
];

/// Where the check gets its views from.
#[derive(Debug, Clone)]
pub enum ViewsInput {
    /// No views source configured; the check reports info.
    Unconfigured,
    /// Views export on disk, read on every score calculation.
    Source(PathBuf),
    /// Views already in memory.
    Views(Vec<View>),
}

/// Checks that every view caches its query results.
pub struct ViewsCacheCheck {
    input: ViewsInput,
    options: AuditOptions,
    registry: CacheRegistry,
    score: Option<Score>,
}

impl ViewsCacheCheck {
    pub fn new(input: ViewsInput, options: AuditOptions) -> Self {
        Self {
            input,
            options,
            registry: CacheRegistry::default(),
            score: None,
        }
    }

    /// Check over views already loaded in memory.
    pub fn with_views(views: Vec<View>, options: AuditOptions) -> Self {
        Self::new(ViewsInput::Views(views), options)
    }

    /// State from the last score calculation.
    pub fn registry(&self) -> &CacheRegistry {
        &self.registry
    }
}

impl Check for ViewsCacheCheck {
    fn name(&self) -> &'static str {
        "views_cache"
    }

    fn label(&self) -> &'static str {
        "Query results caching"
    }

    fn description(&self) -> &'static str {
        "Check the length of time raw query results should be cached."
    }

    fn calculate_score(&mut self) -> Result<Score> {
        self.registry = CacheRegistry::default();

        let score = match &self.input {
            ViewsInput::Unconfigured => Score::Info,
            ViewsInput::Source(path) => {
                let views = source::load(path)?;
                self.registry = CacheRegistry::build(&views);
                self.registry.score()
            }
            ViewsInput::Views(views) => {
                self.registry = CacheRegistry::build(views);
                self.registry.score()
            }
        };

        tracing::debug!(
            "views_cache: {} views, {} not caching",
            self.registry.views.len(),
            self.registry.uncached.len()
        );
        self.score = Some(score);
        Ok(score)
    }

    fn result_pass(&self) -> Option<String> {
        Some("Every View is caching query results.".to_string())
    }

    fn result_warn(&self) -> Option<String> {
        let markup = self.options.markup;
        let views: Vec<_> = self
            .registry
            .uncached
            .iter()
            .map(|v| markup.value(v))
            .collect();
        Some(format!(
            "The following Views are not caching query results: {}",
            views.join(", ")
        ))
    }

    fn result_fail(&self) -> Option<String> {
        Some("No View is caching query results!".to_string())
    }

    fn result_info(&self) -> Option<String> {
        Some("Views is not enabled.".to_string())
    }

    fn action(&self) -> Option<String> {
        if !matches!(self.score, Some(Score::Warn | Score::Fail)) {
            return None;
        }
        let mut action = "Query results should be cached for at least 1 minute.".to_string();
        if self.options.verbose {
            action.push_str(&self.options.markup.steps(REMEDIATION_STEPS));
        }
        Some(action)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
