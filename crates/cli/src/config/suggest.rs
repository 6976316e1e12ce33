// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check name suggestions for config validation.

use std::path::Path;

use crate::checks::CHECK_NAMES;

/// Suggest a check name for a typo.
pub fn suggest_check_name(unknown: &str) -> Option<&'static str> {
    if unknown.is_empty() {
        return None;
    }

    let normalized = unknown.to_ascii_lowercase().replace('-', "_");
    let suggestion = match normalized.as_str() {
        "views" | "view" | "cache" | "caching" | "viewscache" | "views_caching" => {
            Some("views_cache")
        }
        "page_speed" | "psi" | "insights" | "speed" | "pagespeed_insights" => Some("pagespeed"),
        _ => None,
    };
    if suggestion.is_some() {
        return suggestion;
    }

    // Prefix matching needs a few chars to avoid false positives
    if normalized.len() >= 3 {
        for &name in CHECK_NAMES {
            if name.starts_with(normalized.as_str()) || normalized.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about unknown check key with suggestion.
pub fn warn_unknown_check(path: &Path, key: &str) {
    match suggest_check_name(key) {
        Some(suggested) => eprintln!(
            "siteaudit: warning: {}: unknown check `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "siteaudit: warning: {}: unknown check `{}`\n  Valid checks: {}",
            path.display(),
            key,
            CHECK_NAMES.join(", ")
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
