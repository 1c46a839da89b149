//! lint-gofmt core library.
//!
//! Checks that the Go sources of a repository are `gofmt -s` clean by
//! running the external tool once per file and folding the answers into a
//! single verdict.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Fixed patterns and effective settings resolution.
//! - `discover`: Glob expansion and suffix filtering.
//! - `checker`: Per-file tool invocation and aggregation.
//! - `models`: Report structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod checker;
pub mod cli;
pub mod config;
pub mod discover;
pub mod models;
pub mod output;
pub mod utils;
