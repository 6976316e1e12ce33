// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query result lifespan classification and per-view consolidation.
//!
//! Every enabled display resolves to a [`Lifespan`]. Displays without a
//! cache block inherit from the view's default display. A view is
//! consolidated into a single verdict:
//!
//! - all non-default displays inherit: the view is uncached only when the
//!   default display is uncached, and is reported by bare name;
//! - otherwise each display is judged on its own and the view is reported
//!   as `name (display, display)` listing the uncached non-default displays.
//!   The view is flagged when that list is non-empty or the default display
//!   itself is uncached.
//!
//! Anything that cannot be classified counts as uncached.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::model::{CacheBlock, DEFAULT_DISPLAY, Display, View};
use crate::check::Score;

/// Resolved query result lifespan of a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifespan {
    /// Query results are not cached.
    None,
    /// Uses the default display's caching.
    Default,
    /// Cached for this many seconds (always at least 1).
    Seconds(u64),
}

impl Lifespan {
    /// Lifespan of a display taken on its own.
    pub fn of(display: &Display) -> Self {
        match &display.display_options.cache {
            None => Lifespan::Default,
            Some(CacheBlock::Other(_)) => Lifespan::None,
            Some(CacheBlock::Options(options)) => {
                if options.kind.is_empty() || options.kind == "none" {
                    return Lifespan::None;
                }
                Lifespan::from_seconds(
                    options
                        .results_lifespan
                        .max(options.results_lifespan_custom),
                )
            }
        }
    }

    /// Clamp a raw lifespan: anything under one second is no caching.
    pub fn from_seconds(seconds: u64) -> Self {
        if seconds < 1 {
            Lifespan::None
        } else {
            Lifespan::Seconds(seconds)
        }
    }

    pub fn is_none(self) -> bool {
        self == Lifespan::None
    }
}

impl fmt::Display for Lifespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifespan::None => f.write_str("none"),
            Lifespan::Default => f.write_str("default"),
            Lifespan::Seconds(s) => write!(f, "{s}"),
        }
    }
}

/// Classified lifespans of one view's enabled displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewLifespans {
    pub view: String,
    /// Lifespan of the default display. Never [`Lifespan::Default`].
    pub default: Lifespan,
    /// Non-default displays in export order.
    pub displays: IndexMap<String, Lifespan>,
}

impl ViewLifespans {
    /// Classify the enabled displays of `view`.
    ///
    /// A missing or disabled default display, and a default display with
    /// no cache block, leave the default as [`Lifespan::None`].
    pub fn classify(view: &View) -> Self {
        let mut default = Lifespan::None;
        let mut displays = IndexMap::new();

        for (name, display) in view.enabled_displays() {
            let lifespan = Lifespan::of(display);
            if name == DEFAULT_DISPLAY {
                if lifespan != Lifespan::Default {
                    default = lifespan;
                }
            } else {
                displays.insert(name.to_string(), lifespan);
            }
        }

        Self {
            view: view.name.clone(),
            default,
            displays,
        }
    }

    /// True when no non-default display overrides the default's caching.
    pub fn all_default(&self) -> bool {
        self.displays.values().all(|l| *l == Lifespan::Default)
    }

    /// Non-default displays whose results end up uncached.
    pub fn uncached_displays(&self) -> Vec<&str> {
        self.displays
            .iter()
            .filter(|(_, lifespan)| match lifespan {
                Lifespan::None => true,
                Lifespan::Default => self.default.is_none(),
                Lifespan::Seconds(_) => false,
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Report entry for this view, or `None` when its results are cached.
    pub fn verdict(&self) -> Option<String> {
        if self.all_default() {
            return self.default.is_none().then(|| self.view.clone());
        }

        let uncached = self.uncached_displays();
        if uncached.is_empty() && !self.default.is_none() {
            return None;
        }
        Some(format!("{} ({})", self.view, uncached.join(", ")))
    }
}

/// Per-run state of the views cache check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheRegistry {
    /// Classified views in input order.
    pub views: Vec<ViewLifespans>,
    /// Report entries for views that are not caching query results.
    pub uncached: Vec<String>,
}

impl CacheRegistry {
    /// Classify and consolidate the enabled views in `views`.
    ///
    /// Disabled views are not counted toward the score.
    pub fn build(views: &[View]) -> Self {
        let views: Vec<ViewLifespans> = views
            .iter()
            .filter(|v| !v.disabled)
            .map(ViewLifespans::classify)
            .collect();
        let uncached = views.iter().filter_map(ViewLifespans::verdict).collect();
        Self { views, uncached }
    }

    /// PASS with nothing flagged, FAIL with everything flagged, else WARN.
    pub fn score(&self) -> Score {
        if self.uncached.is_empty() {
            Score::Pass
        } else if self.uncached.len() == self.views.len() {
            Score::Fail
        } else {
            Score::Warn
        }
    }
}

#[cfg(test)]
#[path = "lifespan_tests.rs"]
mod tests;
