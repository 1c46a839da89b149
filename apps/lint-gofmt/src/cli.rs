//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lint-gofmt",
    version,
    about = "Check Go sources with gofmt -s -l",
    long_about = "lint-gofmt runs `gofmt -s -l` on every file matching *.go and cmd/dbmate/*.go, one file at a time, and fails when any file is not gofmt-clean.\n\nConfiguration precedence: CLI > lint-gofmt.toml > defaults.",
    after_help = "Examples:\n  lint-gofmt\n  lint-gofmt --repo-root ../dbmate --output json\n  lint-gofmt --gofmt /usr/local/go/bin/gofmt"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, help = "Repository root to check (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "gofmt program to run (default: gofmt from PATH)")]
    pub gofmt: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Print progress notes to stderr")]
    pub verbose: bool,
}
