//! Report models shared by the checker and the printers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Per-file verdict as it appears in reports.
pub enum Status {
    Conforms,
    Violation,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One checked file.
pub struct FileReport {
    pub file: String,
    pub status: Status,
    /// Raw tool output for violations, verbatim.
    pub output: Option<String>,
    /// Invocation failure detail.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated counts; `ok` is the run's verdict.
pub struct Summary {
    pub files: usize,
    pub violations: usize,
    pub errors: usize,
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of one full pass.
pub struct CheckReport {
    pub results: Vec<FileReport>,
    pub summary: Summary,
}

impl CheckReport {
    /// Process exit code for this report: 0 when every file conforms.
    pub fn exit_code(&self) -> i32 {
        if self.summary.ok {
            0
        } else {
            1
        }
    }
}
