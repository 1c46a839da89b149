//! Format checking: run the external tool once per candidate and fold the
//! outcomes into a single report.
//!
//! Files are checked one at a time in discovery order. A failing invocation
//! is recorded for that file and the pass moves on; nothing is retried.

use crate::config::{FILE_PATTERNS, SOURCE_SUFFIX};
use crate::discover::candidate_files;
use crate::models::{CheckReport, FileReport, Status, Summary};
use crate::utils::display_path;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one tool invocation.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// The external formatter, reduced to its "list unformatted files" mode.
pub trait FormatTool {
    /// Program name used in diagnostics.
    fn program(&self) -> &str;

    /// Check a single `file` (relative to `root`) without modifying it.
    fn list_unformatted(&self, root: &Path, file: &Path) -> std::io::Result<RunResult>;
}

/// `gofmt -s -l <file>`, run from the repository root.
pub struct Gofmt {
    program: String,
}

impl Gofmt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FormatTool for Gofmt {
    fn program(&self) -> &str {
        &self.program
    }

    fn list_unformatted(&self, root: &Path, file: &Path) -> std::io::Result<RunResult> {
        let output = Command::new(&self.program)
            .arg("-s")
            .arg("-l")
            .arg(file)
            .current_dir(root)
            .output()?;
        Ok(RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of checking one file.
pub enum CheckResult {
    Conforms,
    /// The tool listed the file; `output` is its stdout, untouched.
    Violation { output: String },
    /// The tool could not be started or exited abnormally.
    InvocationError { message: String },
}

impl CheckResult {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Conforms)
    }
}

/// Check one file. Never fails: every problem becomes a `CheckResult`.
pub fn check_file(tool: &dyn FormatTool, root: &Path, file: &Path) -> CheckResult {
    match tool.list_unformatted(root, file) {
        Err(e) => CheckResult::InvocationError {
            message: format!("failed to run `{}`: {e}", tool.program()),
        },
        Ok(run) if !run.success() => CheckResult::InvocationError {
            message: describe_failure(tool.program(), &run),
        },
        Ok(run) if run.stdout.is_empty() => CheckResult::Conforms,
        Ok(run) => CheckResult::Violation { output: run.stdout },
    }
}

fn describe_failure(program: &str, run: &RunResult) -> String {
    let status = match run.exit_code {
        Some(code) => format!("`{program}` exited with status {code}"),
        None => format!("`{program}` was terminated by a signal"),
    };
    let stderr = run.stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{status}: {stderr}")
    }
}

/// Check every file in order, exactly once each.
pub fn check_files(
    tool: &dyn FormatTool,
    root: &Path,
    files: &[PathBuf],
) -> Vec<(PathBuf, CheckResult)> {
    files
        .iter()
        .map(|f| (f.clone(), check_file(tool, root, f)))
        .collect()
}

/// Fold per-file outcomes into a report. The run is ok iff every file conforms.
pub fn aggregate(results: Vec<(PathBuf, CheckResult)>) -> CheckReport {
    let files = results.len();
    let mut violations = 0usize;
    let mut errors = 0usize;
    let mut out = Vec::with_capacity(files);
    for (path, res) in results {
        let file = display_path(&path);
        let item = match res {
            CheckResult::Conforms => FileReport {
                file,
                status: Status::Conforms,
                output: None,
                error: None,
            },
            CheckResult::Violation { output } => {
                violations += 1;
                FileReport {
                    file,
                    status: Status::Violation,
                    output: Some(output),
                    error: None,
                }
            }
            CheckResult::InvocationError { message } => {
                errors += 1;
                FileReport {
                    file,
                    status: Status::Error,
                    output: None,
                    error: Some(message),
                }
            }
        };
        out.push(item);
    }
    CheckReport {
        results: out,
        summary: Summary {
            files,
            violations,
            errors,
            ok: violations == 0 && errors == 0,
        },
    }
}

/// Run the full pass over the fixed patterns under `root`.
pub fn run_check(root: &Path, tool: &dyn FormatTool) -> anyhow::Result<CheckReport> {
    let files = candidate_files(root, FILE_PATTERNS, SOURCE_SUFFIX)?;
    Ok(aggregate(check_files(tool, root, &files)))
}
