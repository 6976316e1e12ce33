// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML document output.
//!
//! Check reports are built with HTML markup, so messages and actions are
//! embedded as-is. Labels, descriptions and skip errors are escaped here.

use std::io::Write;

use super::summary_line;
use crate::check::{CheckOutput, CheckResult};
use crate::markup::escape_html;

/// HTML output formatter.
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        writeln!(self.writer, "{}", render_document(output))
    }
}

fn css() -> &'static str {
    r#":root {
      --bg: #f7f7f9;
      --card-bg: #ffffff;
      --text: #1f2933;
      --muted: #616e7c;
      --pass: #2f9e44;
      --warn: #e8a317;
      --fail: #d64545;
      --info: #3a7bd5;
    }
    * { box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: var(--bg);
      color: var(--text);
      margin: 0;
      padding: 2rem;
      line-height: 1.5;
    }
    .container { max-width: 960px; margin: 0 auto; }
    header { margin-bottom: 1.5rem; }
    h1 { font-size: 1.5rem; margin: 0; }
    .meta { color: var(--muted); font-size: 0.875rem; }
    .check {
      background: var(--card-bg);
      border-left: 4px solid var(--muted);
      border-radius: 6px;
      padding: 1rem 1.5rem;
      margin-bottom: 1rem;
    }
    .check.pass { border-color: var(--pass); }
    .check.warn { border-color: var(--warn); }
    .check.fail, .check.error { border-color: var(--fail); }
    .check.info { border-color: var(--info); }
    .check h2 { font-size: 1.125rem; margin: 0 0 0.25rem; }
    .status { font-size: 0.75rem; font-weight: 600; margin-left: 0.5rem; }
    .description { color: var(--muted); margin: 0 0 0.75rem; }
    .action { border-top: 1px solid var(--bg); padding-top: 0.5rem; }"#
}

/// Render one check as a `<section>`.
pub fn render_check(result: &CheckResult) -> String {
    let (class, status) = match result.score {
        Some(score) => (score.as_str(), score.label()),
        None => ("skip", "SKIP"),
    };

    let mut body = String::new();
    if let Some(error) = &result.error {
        body.push_str(&format!(
            "\n      <div class=\"error\">{}</div>",
            escape_html(error)
        ));
    }
    if let Some(message) = &result.message {
        body.push_str(&format!("\n      <div class=\"report\">{message}</div>"));
    }
    if let Some(action) = &result.action {
        body.push_str(&format!("\n      <div class=\"action\">{action}</div>"));
    }

    format!(
        r#"    <section class="check {class}" id="{name}">
      <h2>{label}<span class="status">{status}</span></h2>
      <p class="description">{description}</p>{body}
    </section>"#,
        name = escape_html(&result.name),
        label = escape_html(&result.label),
        description = escape_html(&result.description),
    )
}

/// Render the complete HTML document.
pub fn render_document(output: &CheckOutput) -> String {
    let css = css();
    let timestamp = escape_html(&output.timestamp);
    let summary = summary_line(output);
    let sections = output
        .checks
        .iter()
        .map(render_check)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Site Audit Report</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>Site Audit Report</h1>
      <div class="meta">{timestamp} &middot; {summary}</div>
    </header>
{sections}
  </div>
</body>
</html>"#
    )
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
