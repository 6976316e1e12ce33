// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exported Views configuration.
//!
//! Mirrors the shape of a Views export: a view owns an ordered map of
//! displays, and each display may carry its own `cache` block in
//! `display_options`. Exports written by PHP are loose about types, so
//! flags and lifespans accept numbers, numeric strings, and booleans.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Name of the display every other display inherits from.
pub const DEFAULT_DISPLAY: &str = "default";

/// A configured view.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct View {
    pub name: String,

    #[serde(default, deserialize_with = "loose_bool")]
    pub disabled: bool,

    /// Displays in export order, keyed by display name.
    #[serde(default, alias = "displays")]
    pub display: IndexMap<String, Display>,
}

impl View {
    /// Displays that are not disabled, in export order.
    pub fn enabled_displays(&self) -> impl Iterator<Item = (&str, &Display)> {
        self.display
            .iter()
            .filter(|(_, d)| !d.disabled)
            .map(|(name, d)| (name.as_str(), d))
    }
}

/// One rendering variant of a view (page, block, feed, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Display {
    #[serde(default, deserialize_with = "loose_bool")]
    pub disabled: bool,

    #[serde(default)]
    pub display_options: DisplayOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisplayOptions {
    /// Explicit cache settings; absent when the display uses the
    /// default display's caching.
    #[serde(default)]
    pub cache: Option<CacheBlock>,
}

/// The `cache` entry of a display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CacheBlock {
    Options(CacheOptions),
    /// Anything other than an options map. Exports write `''` when
    /// caching was cleared.
    Other(serde_json::Value),
}

/// Explicit query result cache settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CacheOptions {
    /// Cache plugin, `"none"` disables caching.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Lifespan in seconds.
    #[serde(default, deserialize_with = "loose_seconds")]
    pub results_lifespan: u64,

    /// Lifespan in seconds when `results_lifespan` is set to custom.
    #[serde(default, deserialize_with = "loose_seconds")]
    pub results_lifespan_custom: u64,
}

impl CacheOptions {
    pub fn new(kind: impl Into<String>, results_lifespan: u64, results_lifespan_custom: u64) -> Self {
        Self {
            kind: kind.into(),
            results_lifespan,
            results_lifespan_custom,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseScalar {
    fn as_f64(&self) -> f64 {
        match self {
            LooseScalar::Bool(b) => f64::from(u8::from(*b)),
            LooseScalar::Int(i) => *i as f64,
            LooseScalar::Float(f) => *f,
            // Non-numeric strings such as "custom" count as zero
            LooseScalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

fn loose_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<LooseScalar> = Option::deserialize(deserializer)?;
    let value = raw.map_or(0.0, |v| v.as_f64());
    if value.is_finite() && value > 0.0 {
        Ok(value.trunc() as u64)
    } else {
        Ok(0)
    }
}

fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<LooseScalar> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => false,
        Some(LooseScalar::Text(s)) => matches!(s.trim(), "1" | "true" | "TRUE" | "yes"),
        Some(other) => other.as_f64() != 0.0,
    })
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
