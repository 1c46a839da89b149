//! Output rendering for check reports.
//!
//! Supports `human` (default) and `json`. Human output on stdout is the
//! concatenated tool listings followed by one status line; invocation
//! failures are described on stderr.

use crate::config::OutputMode;
use crate::models::{CheckReport, Status};
use crate::utils::{error_prefix, use_colors};
use anyhow::Context;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

pub const SUCCESS_MESSAGE: &str = "All files pass gofmt.";
pub const REMEDIATION_MESSAGE: &str =
    "Reformat the files listed above with \"gofmt -s -w\" and try again.";

/// Print a report in the requested mode.
pub fn print_report(report: &CheckReport, output: OutputMode) -> anyhow::Result<()> {
    match output {
        OutputMode::Json => {
            let out = serde_json::to_string_pretty(&compose_json(report)?)
                .context("failed to serialize report")?;
            println!("{out}");
        }
        OutputMode::Human => {
            for r in report.results.iter().filter(|r| r.status == Status::Error) {
                eprintln!(
                    "{} {}: {}",
                    error_prefix(),
                    r.file,
                    r.error.as_deref().unwrap_or("check failed")
                );
            }
            let listing = render_listing(report);
            print!("{listing}");
            let status = status_line(report);
            if use_colors(output) {
                if report.summary.ok {
                    println!("{}", status.green().bold());
                } else {
                    println!("{}", status.red().bold());
                }
            } else {
                println!("{status}");
            }
        }
    }
    Ok(())
}

/// The verbatim tool output of every violating file, in check order.
fn render_listing(report: &CheckReport) -> String {
    report
        .results
        .iter()
        .filter_map(|r| r.output.as_deref())
        .collect()
}

fn status_line(report: &CheckReport) -> &'static str {
    if report.summary.ok {
        SUCCESS_MESSAGE
    } else {
        REMEDIATION_MESSAGE
    }
}

/// Compose the full human stdout (pure) for testing purposes.
pub fn render_human(report: &CheckReport) -> String {
    let mut out = render_listing(report);
    out.push_str(status_line(report));
    out.push('\n');
    out
}

/// Compose the JSON report object (pure) for testing purposes.
pub fn compose_json(report: &CheckReport) -> anyhow::Result<JsonVal> {
    serde_json::to_value(report).context("failed to serialize report")
}
