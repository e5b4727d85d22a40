//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the effective options as a colored summary or as JSON.
//!
//! 以彩色摘要或 JSON 形式打印生效的选项。

use anyhow::Result;
use colored::*;
use serde::Serialize;
use serde_json::Value;

use crate::core::formats::{FormatCategory, FormatDirectives};
use crate::core::options::Options;
use crate::infra::t;

/// The result of a `show` run, as serialized by `--json`.
#[derive(Debug, Serialize)]
pub struct ShowReport<'a> {
    /// The locale the store received.
    pub locale: Option<String>,
    pub options: &'a Options,
}

fn describe_directives(directives: &FormatDirectives) -> String {
    directives
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the colored, human-readable summary.
pub fn render_summary(report: &ShowReport<'_>) -> String {
    let options = report.options;
    let none = t!("report.none").to_string();
    let mut out = Vec::new();

    out.push(format!("{}", t!("report.title").cyan().bold()));
    out.push(format!(
        "  {}: {}",
        t!("report.locale"),
        report.locale.as_deref().unwrap_or(&none).green().bold()
    ));
    out.push(format!(
        "  {}: {}",
        t!("report.fallback"),
        options.fallback_locale.as_deref().unwrap_or(&none)
    ));
    out.push(format!(
        "  {}: {} ms",
        t!("report.loading_delay"),
        options.loading_delay.as_millis()
    ));
    let warn = if options.warn_on_missing_messages {
        t!("report.yes")
    } else {
        t!("report.no")
    };
    out.push(format!("  {}: {}", t!("report.warn_missing"), warn));
    out.push(format!("  {}:", t!("report.formats")));

    for category in FormatCategory::ALL {
        out.push(format!("    {}", category.as_str().yellow()));
        for (name, directives) in options.formats.category(category) {
            out.push(format!("      {:<14} {}", name, describe_directives(directives).dimmed()));
        }
    }

    out.join("\n")
}

/// Prints the colored summary to stdout.
pub fn print_summary(report: &ShowReport<'_>) {
    println!("{}", render_summary(report));
}

/// Prints the report as pretty JSON to stdout.
pub fn print_json(report: &ShowReport<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
