// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for request timeouts: `"500ms"`, `"30s"`, `"1.5s"`, `"2m"`.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Parse a duration string into a Duration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // "ms" before "s" and "m"
    let (number, to_secs): (&str, fn(f64) -> f64) = if let Some(n) = s.strip_suffix("ms") {
        (n, |v| v / 1000.0)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, |v| v)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, |v| v * 60.0)
    } else {
        return Err(format!("invalid duration format: {s} (use 500ms, 30s, or 2m)"));
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration: {s}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("invalid duration: {s}"));
    }
    Ok(Duration::from_secs_f64(to_secs(value)))
}

/// Deserialize an optional duration string.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_duration(&s).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
