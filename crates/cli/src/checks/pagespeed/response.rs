// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PageSpeed Insights response body.
//!
//! Only the fields the report uses are modeled. Every field is optional so
//! partial responses decode instead of failing, and an explicit `null` reads
//! the same as an absent field.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// `$1`, `$2`, ... placeholders in Google format strings.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)").expect("valid regex"));

/// Decoded `runPagespeed` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Present when the API rejected the request.
    #[serde(default)]
    pub error: Option<ApiError>,

    /// Final URL that was analyzed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Overall score, 0-100.
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,

    /// Page statistics in response order (counts and byte sizes).
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_stats: IndexMap<String, JsonValue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub formatted_results: FormattedResults,
}

/// Top-level `error` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResults {
    /// Rule results keyed by rule id, in response order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_results: IndexMap<String, RuleResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub localized_rule_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_impact: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_score: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url_blocks: Vec<UrlBlock>,
}

/// A group of URLs under a formatted header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlBlock {
    #[serde(default)]
    pub header: Option<FormatString>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: FormatString,
}

/// Localized text with positional placeholders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatString {
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Vec<FormatArg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatArg {
    #[serde(default)]
    pub value: JsonValue,
}

impl FormatArg {
    /// Argument value as display text.
    pub fn text(&self) -> String {
        match &self.value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl FormatString {
    /// Substitute `$N` with the value of the N-th argument (1-based).
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            return self.format.clone();
        }
        PLACEHOLDER
            .replace_all(&self.format, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.args.get(i))
                    .map_or_else(|| caps[0].to_string(), FormatArg::text)
            })
            .into_owned()
    }
}

impl ApiErrorItem {
    /// `message (domain - reason)`
    pub fn describe(&self) -> String {
        format!("{} ({} - {})", self.message, self.domain, self.reason)
    }
}

impl ApiError {
    /// One line per reported error.
    ///
    /// Falls back to the top-level message when the error list is empty.
    pub fn describe(&self) -> Vec<String> {
        if !self.errors.is_empty() {
            return self.errors.iter().map(ApiErrorItem::describe).collect();
        }
        let message = self.message.as_deref().unwrap_or("Unknown error");
        match self.code {
            Some(code) => vec![format!("{message} ({code})")],
            None => vec![message.to_string()],
        }
    }
}

/// Decode `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
