// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for check results.

pub mod html;
pub mod json;
pub mod text;

use crate::check::{CheckOutput, Score};

/// `2 checks: 1 passed, 0 warned, 1 failed`, with info and skipped counts
/// appended when present.
pub fn summary_line(output: &CheckOutput) -> String {
    let total = output.checks.len();
    let mut line = format!(
        "{} check{}: {} passed, {} warned, {} failed",
        total,
        if total == 1 { "" } else { "s" },
        output.count(Score::Pass),
        output.count(Score::Warn),
        output.count(Score::Fail) + output.count(Score::Error),
    );
    let info = output.count(Score::Info);
    if info > 0 {
        line.push_str(&format!(", {info} info"));
    }
    let skipped = output.skipped();
    if skipped > 0 {
        line.push_str(&format!(", {skipped} skipped"));
    }
    line
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
