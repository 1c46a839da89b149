//! lint-gofmt CLI binary entry point.
//! Resolves settings, runs the check pass, prints the report and maps the
//! verdict to the exit code.

use clap::Parser;
use lint_gofmt::checker::{self, Gofmt};
use lint_gofmt::cli::Cli;
use lint_gofmt::config::{self, OutputMode, FILE_PATTERNS};
use lint_gofmt::output;
use lint_gofmt::utils::{error_prefix, info_prefix, note_prefix};

fn main() {
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", error_prefix());
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.output.as_deref(),
        cli.gofmt.as_deref(),
    )?;
    let chatty = cli.verbose && eff.output == OutputMode::Human;
    if chatty {
        match &eff.config_path {
            Some(p) => eprintln!("{} using settings from {}", info_prefix(), p.display()),
            None => eprintln!("{} no lint-gofmt.toml found; using defaults", note_prefix()),
        }
        eprintln!(
            "{} checking patterns: [{}]",
            info_prefix(),
            FILE_PATTERNS.join(", ")
        );
    }

    let tool = Gofmt::new(eff.gofmt.as_str());
    let report = checker::run_check(&eff.repo_root, &tool)?;
    if chatty {
        eprintln!(
            "{} checked {} file(s): {} violation(s), {} error(s)",
            info_prefix(),
            report.summary.files,
            report.summary.violations,
            report.summary.errors
        );
    }
    output::print_report(&report, eff.output)?;
    Ok(report.exit_code())
}
