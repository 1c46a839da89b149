//! Small helpers shared by the binary and printers.
//!
//! Colour is only emitted when the destination stream is a terminal and
//! `NO_COLOR` is unset, so piped output stays plain.

use crate::config::OutputMode;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Whether the stdout report may be coloured.
pub fn use_colors(output: OutputMode) -> bool {
    colors_for(output, std::io::stdout().is_terminal(), no_color_env())
}

fn colors_for(output: OutputMode, is_tty: bool, no_color: bool) -> bool {
    output == OutputMode::Human && is_tty && !no_color
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if std::io::stderr().is_terminal() && !no_color_env() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Render a path with forward slashes so reports look the same on every
/// platform.
pub fn display_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
