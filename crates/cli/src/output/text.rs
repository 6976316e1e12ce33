// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <label>: WARN
//!   <report>
//!   <action>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::summary_line;
use crate::check::{CheckOutput, CheckResult};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a single check result.
    pub fn write_check(&mut self, result: &CheckResult) -> std::io::Result<()> {
        self.writer.set_color(&scheme::check_label())?;
        write!(self.writer, "{}", result.label)?;
        self.writer.reset()?;
        write!(self.writer, ": ")?;

        match result.score {
            Some(score) => {
                self.writer.set_color(&scheme::score(score))?;
                write!(self.writer, "{}", score.label())?;
            }
            None => {
                self.writer.set_color(&scheme::skip())?;
                write!(self.writer, "SKIP")?;
            }
        }
        self.writer.reset()?;
        writeln!(self.writer)?;

        if let Some(error) = &result.error {
            self.write_indented(error)?;
        }
        if let Some(message) = &result.message {
            self.write_indented(message)?;
        }
        if let Some(action) = &result.action {
            self.writer.set_color(&scheme::action())?;
            self.write_indented(action)?;
            self.writer.reset()?;
        }
        Ok(())
    }

    /// Two-space indent on every line, blank lines kept blank.
    fn write_indented(&mut self, text: &str) -> std::io::Result<()> {
        for line in text.lines() {
            if line.is_empty() {
                writeln!(self.writer)?;
            } else {
                writeln!(self.writer, "  {line}")?;
            }
        }
        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        writeln!(self.writer, "{}", summary_line(output))
    }

    /// Write every result followed by the summary.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        for result in &output.checks {
            self.write_check(result)?;
        }
        self.write_summary(output)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
