// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;

use siteaudit::checks::{self, AuditSettings};
use siteaudit::cli::{CheckArgs, CheckFilter, Cli, OutputFormat};
use siteaudit::color::resolve_color;
use siteaudit::config;
use siteaudit::discovery;
use siteaudit::error::ExitCode;
use siteaudit::output::html::HtmlFormatter;
use siteaudit::output::json::{self, JsonFormatter};
use siteaudit::output::text::TextFormatter;
use siteaudit::runner;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let (config, config_dir) = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            (
                config::load_with_warnings(path)?,
                discovery::config_dir(path, &cwd),
            )
        }
        None => {
            tracing::debug!("no config found, using defaults");
            (config::Config::default(), cwd.clone())
        }
    };

    let settings = AuditSettings::resolve(&config, &config_dir, &cwd, args)?;
    let checks = checks::filter_checks(
        checks::all_checks(&settings),
        &args.enabled_checks(),
        &args.disabled_checks(),
    );
    tracing::debug!("running {} checks", checks.len());

    let output = json::create_output(runner::run(checks));

    match args.output {
        OutputFormat::Text => {
            let color = resolve_color(args.color, args.no_color);
            TextFormatter::stdout(color).write(&output)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock()).write(&output)?;
        }
        OutputFormat::Html => {
            let mut stdout = std::io::stdout().lock();
            HtmlFormatter::new(&mut stdout).write(&output)?;
            stdout.flush()?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
