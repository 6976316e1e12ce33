// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod markup;
pub mod output;
pub mod runner;

pub use check::{AuditOptions, Check, CheckOutput, CheckResult, Score};
pub use checks::AuditSettings;
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use markup::Markup;

#[cfg(test)]
pub mod test_utils;
