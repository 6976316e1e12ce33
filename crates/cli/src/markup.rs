// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report string markup.
//!
//! Checks build their report strings either as indented plain text for the
//! terminal or as HTML fragments for the html output format. Values that
//! come from the audited site are escaped in HTML mode.

use std::borrow::Cow;

/// Markup used for check report strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    #[default]
    Text,
    Html,
}

impl Markup {
    /// Escape a site-supplied value for inclusion in a report.
    pub fn value<'a>(self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Markup::Text => Cow::Borrowed(raw),
            Markup::Html => escape_html(raw),
        }
    }

    /// Render numbered steps: `<ol>` in HTML, indented dashes in text.
    ///
    /// Text output starts with a newline so the steps can follow a sentence.
    pub fn steps(self, steps: &[&str]) -> String {
        match self {
            Markup::Html => wrap_items("ol", steps),
            Markup::Text => steps.iter().map(|s| format!("\n    - {s}")).collect(),
        }
    }

    /// Render a bulleted list: `<ul>` in HTML, one item per line in text.
    pub fn list<S: AsRef<str>>(self, items: &[S]) -> String {
        match self {
            Markup::Html => wrap_items("ul", items),
            Markup::Text => items
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn wrap_items<S: AsRef<str>>(tag: &str, items: &[S]) -> String {
    let mut out = format!("<{tag}>");
    for item in items {
        out.push_str("<li>");
        out.push_str(item.as_ref());
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
    out
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
