// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner with error recovery.
//!
//! Each check runs to completion before the next starts. Errors and panics
//! are isolated so one broken check doesn't prevent the others from running.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use crate::check::{Check, CheckResult};
use crate::checks::CHECK_NAMES;

/// Run all provided checks and return results in canonical order.
pub fn run(checks: Vec<Box<dyn Check>>) -> Vec<CheckResult> {
    let mut results: Vec<CheckResult> = checks.into_iter().map(run_one).collect();

    results.sort_by_key(|r| {
        CHECK_NAMES
            .iter()
            .position(|&n| n == r.name)
            .unwrap_or(usize::MAX)
    });
    results
}

/// Calculate one check's score and collect its report.
pub fn run_one(mut check: Box<dyn Check>) -> CheckResult {
    let start = Instant::now();
    tracing::debug!("running check {}", check.name());

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        check
            .calculate_score()
            .map(|score| CheckResult::scored(check.as_ref(), score))
    }));

    let mut result = match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::warn!("{}: {}", check.name(), e);
            CheckResult::skipped(check.as_ref(), e.to_string())
        }
        Err(_) => CheckResult::skipped(check.as_ref(), "Internal error: check panicked"),
    };
    result.duration_ms = Some(start.elapsed().as_millis() as u64);
    result
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
