// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for siteaudit.toml.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "siteaudit.toml";

/// Find siteaudit.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// An explicit path (`-C`/`--config`, or `SITEAUDIT_CONFIG` through clap)
/// must exist. Otherwise discovery runs from `cwd`; `None` means defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };
    let path = if path.is_relative() {
        cwd.join(path)
    } else {
        path.to_path_buf()
    };
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        });
    }
    Ok(Some(path))
}

/// Directory relative paths in a config file are resolved against.
pub fn config_dir(config_path: &Path, cwd: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
