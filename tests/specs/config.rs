// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration loading.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn config_is_found_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[check.views_cache]\nsource = \"exports/views.json\"\n");
    temp.file(
        "exports/views.json",
        r#"[{"name": "a", "display": {"default": {"display_options": {"cache": {"type": "none"}}}}}]"#,
    );
    temp.file("web/sites/.keep", "");
    check("views_cache")
        .pwd(temp.path().join("web/sites"))
        .exits(1)
        .stdout_has("Query results caching: FAIL");
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file(
        "conf/audit.toml",
        "version = 1\n[check.pagespeed]\nurl = \"https://example.com/\"\n",
    );
    check("pagespeed")
        .pwd(temp.path())
        .args(&["-C", "conf/audit.toml"])
        .passes()
        .stdout_has("INFO");
}

#[test]
fn config_env_var() {
    let config = fixture("views-mixed").join("siteaudit.toml");
    let temp = Project::empty();
    check("views_cache")
        .pwd(temp.path())
        .env("SITEAUDIT_CONFIG", config.to_str().unwrap())
        .passes()
        .stdout_has("archive (), glossary (page_1)");
}

#[test]
fn missing_explicit_config_exits_2() {
    let temp = Project::empty();
    check("views_cache")
        .pwd(temp.path())
        .args(&["-C", "missing.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_exits_2() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    check("views_cache")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_toml_exits_2() {
    let temp = Project::empty();
    temp.config("version = 1\n[check.pagespeed\n");
    check("pagespeed").pwd(temp.path()).exits(2);
}

#[test]
fn unknown_keys_warn() {
    let temp = Project::empty();
    temp.config("theme = \"dark\"\n[check.pagespeed]\nstrategy = \"mobile\"\n[check.view]\nsource = \"x\"\n");
    check("pagespeed")
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `theme` (ignored)")
        .stderr_has("unrecognized field `check.pagespeed.strategy` (ignored)")
        .stderr_has("unknown check `view`. Did you mean `views_cache`?");
}

#[test]
fn negative_impact_exits_2() {
    let temp = Project::empty();
    temp.config("[check.pagespeed]\nimpact = -2.0\n");
    check("pagespeed")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("impact must be a non-negative number");
}
