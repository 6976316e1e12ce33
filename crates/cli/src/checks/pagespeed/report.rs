// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose PageSpeed Insights report.
//!
//! Text layout:
//! ```text
//! Example Domain - https://example.com/: 85
//!     Page stats
//!       - Number Resources: 4
//!       - Total Request Bytes: 2KB
//!     Detailed results:
//!       Leverage browser caching: 40 (HIGH impact: 6)
//!         Setting an expiry date for static resources:
//!           https://example.com/a.css (expiration not specified)
//! ```
//! HTML uses `<dl>` for stats, `<h3>`/`<h4>` headings and `<ul>` lists.

use serde_json::Value as JsonValue;

use super::response::{Insights, RuleResult, UrlBlock};
use crate::markup::Markup;

/// Rules at or above this impact are labelled HIGH.
const HIGH_IMPACT: f64 = 3.0;

/// Filters applied to the detailed results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportFilter {
    /// Skip rules whose impact is below this value (0 = show all).
    pub impact: f64,
    /// Maximum URLs listed per block (0 = unlimited).
    pub limit: usize,
}

/// `title - id: score`
pub fn summary(insights: &Insights, markup: Markup) -> String {
    format!(
        "{} - {}: {}",
        markup.value(&insights.title),
        markup.value(&insights.id),
        insights.score
    )
}

/// Render page stats and detailed rule results.
pub fn render(insights: &Insights, filter: ReportFilter, markup: Markup) -> String {
    let mut out = Vec::new();
    page_stats(&mut out, insights, markup);
    detailed_results(&mut out, insights, filter, markup);

    match markup {
        Markup::Html => out.concat(),
        Markup::Text => out.join("\n"),
    }
}

fn page_stats(out: &mut Vec<String>, insights: &Insights, markup: Markup) {
    let stats: Vec<String> = insights
        .page_stats
        .iter()
        .map(|(name, value)| markup.value(&format_stat(name, value)).into_owned())
        .collect();

    match markup {
        Markup::Html => out.push(format!(
            "<dl><dt>Page stats</dt>{}</dl>",
            stats
                .iter()
                .map(|s| format!("<dd>{s}</dd>"))
                .collect::<String>()
        )),
        Markup::Text => {
            out.push("    Page stats".to_string());
            out.extend(stats.into_iter().map(|s| format!("      - {s}")));
        }
    }
}

fn detailed_results(out: &mut Vec<String>, insights: &Insights, filter: ReportFilter, markup: Markup) {
    out.push(match markup {
        Markup::Html => "<h3>Detailed results</h3>".to_string(),
        Markup::Text => "    Detailed results:".to_string(),
    });

    let mut rendered = 0;
    for rule in insights.formatted_results.rule_results.values() {
        if rule.rule_impact < filter.impact {
            continue;
        }
        rendered += 1;
        rule_line(out, rule, markup);
        for block in &rule.url_blocks {
            url_block(out, block, filter.limit, markup);
        }
    }

    // Say so explicitly, an empty section looks broken
    if rendered == 0 {
        let message = if filter.impact > 0.0 {
            "Nice, no problems to report!"
        } else {
            "No results, which is unusual..."
        };
        out.push(match markup {
            Markup::Html => format!("<p>{message}</p>"),
            Markup::Text => format!("      {message}"),
        });
    }
}

fn rule_line(out: &mut Vec<String>, rule: &RuleResult, markup: Markup) {
    let mut line = format!(
        "{}: {}",
        markup.value(&rule.localized_rule_name),
        rule.rule_score
    );
    if let Some(impact) = impact_label(rule.rule_impact) {
        line.push(' ');
        line.push_str(&impact);
    }
    out.push(match markup {
        Markup::Html => format!("<p>{line}</p>"),
        Markup::Text => format!("      {line}"),
    });
}

fn url_block(out: &mut Vec<String>, block: &UrlBlock, limit: usize, markup: Markup) {
    if let Some(header) = &block.header {
        let header = markup.value(&header.render()).into_owned();
        out.push(match markup {
            Markup::Html => format!("<h4>{header}</h4>"),
            Markup::Text => format!("        {header}"),
        });
    }

    if block.urls.is_empty() {
        return;
    }

    let total = block.urls.len();
    let shown = if limit > 0 { limit.min(total) } else { total };
    let mut urls: Vec<String> = block.urls[..shown]
        .iter()
        .map(|u| markup.value(&u.result.render()).into_owned())
        .collect();
    if shown < total {
        urls.push(format!("(Showing {shown} out of {total} total)"));
    }

    match markup {
        Markup::Html => out.push(markup.list(&urls)),
        Markup::Text => out.extend(urls.into_iter().map(|u| format!("          {u}"))),
    }
}

/// `(HIGH impact: x)` or `(low impact: x)`; nothing for zero impact.
pub fn impact_label(impact: f64) -> Option<String> {
    if impact >= HIGH_IMPACT {
        Some(format!("(HIGH impact: {impact})"))
    } else if impact > 0.0 {
        Some(format!("(low impact: {impact})"))
    } else {
        None
    }
}

/// `Name: value`, with byte counts shown in kilobytes.
pub fn format_stat(name: &str, value: &JsonValue) -> String {
    let label = humanize_stat_name(name);
    if name.to_ascii_lowercase().contains("bytes") {
        let bytes = stat_number(value);
        let kb = (bytes / 1024.0 * 100.0).round() / 100.0;
        format!("{label}: {kb}KB")
    } else {
        let count = match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("{label}: {count}")
    }
}

fn stat_number(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(0.0),
        JsonValue::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Split a camelCase stat name into capitalized words.
///
/// A space goes before an upper-case letter that starts a word: one that
/// follows a lower-case letter, or ends a run of capitals before a
/// lower-case letter (`numberJsResources` → `Number Js Resources`, `HTMLBytes` → `HTML Bytes`).
pub fn humanize_stat_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let after_lower = !chars[i - 1].is_uppercase();
            let before_lower = chars.get(i + 1).is_some_and(|n| !n.is_uppercase());
            if after_lower || before_lower {
                out.push(' ');
            }
        }
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
