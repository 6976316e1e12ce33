// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles siteaudit.toml parsing with version validation and unknown key warnings.

pub mod duration;
mod parse;
mod suggest;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{warn_unknown_key, warn_unknown_keys};
use suggest::warn_unknown_check;

pub use suggest::suggest_check_name;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "check"];

const KNOWN_VIEWS_CACHE_KEYS: &[&str] = &["source"];

const KNOWN_PAGESPEED_KEYS: &[&str] = &["url", "key", "impact", "limit", "endpoint", "timeout"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Per-check settings.
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub views_cache: ViewsCacheConfig,

    #[serde(default)]
    pub pagespeed: PageSpeedConfig,
}

/// `[check.views_cache]`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewsCacheConfig {
    /// Views export file or directory, relative to the config file.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

/// `[check.pagespeed]`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSpeedConfig {
    /// Page to analyze.
    #[serde(default)]
    pub url: Option<String>,

    /// Google API key.
    #[serde(default)]
    pub key: Option<String>,

    /// Minimum rule impact shown in verbose reports (0 = all rules).
    #[serde(default)]
    pub impact: f64,

    /// Maximum URLs listed per block (0 = unlimited).
    #[serde(default)]
    pub limit: usize,

    /// Override for the runPagespeed endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Time allowed for the whole request (e.g. "60s").
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,
}

impl Config {
    /// Views source resolved against the directory holding the config file.
    pub fn views_source(&self, config_dir: &Path) -> Option<PathBuf> {
        let source = self.check.views_cache.source.as_ref()?;
        Some(config_dir.join(source))
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade siteaudit to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    // Already valid TOML if parse succeeded
    let table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    if let Some(toml::Value::Table(checks)) = table.get("check") {
        for (name, value) in checks {
            match name.as_str() {
                "views_cache" => {
                    warn_unknown_keys(path, "check.views_cache", value, KNOWN_VIEWS_CACHE_KEYS)
                }
                "pagespeed" => {
                    warn_unknown_keys(path, "check.pagespeed", value, KNOWN_PAGESPEED_KEYS)
                }
                other => warn_unknown_check(path, other),
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
