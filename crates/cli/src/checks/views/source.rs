// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading exported views from disk.
//!
//! A source is either a single JSON/YAML file holding a list of views (or
//! one view), or a directory whose `*.json`, `*.yml` and `*.yaml` files each
//! hold one view. Directory entries are read in file name order. Disabled
//! views are dropped.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::View;
use crate::error::{Error, Result};

const EXTENSIONS: &[&str] = &["json", "yml", "yaml"];

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<View>),
    One(View),
}

/// Load the enabled views from `path`.
pub fn load(path: &Path) -> Result<Vec<View>> {
    let views = if path.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };

    let total = views.len();
    let enabled: Vec<View> = views.into_iter().filter(|v| !v.disabled).collect();
    tracing::debug!(
        "loaded {} views from {} ({} disabled)",
        enabled.len(),
        path.display(),
        total - enabled.len()
    );
    Ok(enabled)
}

fn load_dir(dir: &Path) -> Result<Vec<View>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_view_extension(p))
        .collect();
    files.sort();

    let mut views = Vec::with_capacity(files.len());
    for file in &files {
        tracing::trace!("reading view export {}", file.display());
        views.extend(load_file(file)?);
    }
    Ok(views)
}

fn load_file(path: &Path) -> Result<Vec<View>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

/// Parse an export, choosing YAML or JSON by file extension.
pub fn parse(content: &str, path: &Path) -> Result<Vec<View>> {
    let parsed: OneOrMany = if is_yaml(path) {
        serde_yaml::from_str(content).map_err(|e| source_error(path, e))?
    } else {
        serde_json::from_str(content).map_err(|e| source_error(path, e))?
    };

    Ok(match parsed {
        OneOrMany::Many(views) => views,
        OneOrMany::One(view) => vec![view],
    })
}

fn source_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Source {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn has_view_extension(path: &Path) -> bool {
    extension(path).is_some_and(|e| EXTENSIONS.contains(&e.as_str()))
}

fn is_yaml(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("yml" | "yaml"))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
