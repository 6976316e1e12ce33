// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unknown key reporting.

use std::path::Path;

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "siteaudit: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about every key of a `[section]` table not listed in `known`.
pub(super) fn warn_unknown_keys(path: &Path, section: &str, value: &toml::Value, known: &[&str]) {
    let Some(table) = value.as_table() else {
        return;
    };
    for key in unknown_keys(table, known) {
        warn_unknown_key(path, &format!("{section}.{key}"));
    }
}

fn unknown_keys<'a>(table: &'a toml::Table, known: &[&str]) -> Vec<&'a str> {
    table
        .keys()
        .map(String::as_str)
        .filter(|k| !known.contains(k))
        .collect()
}
