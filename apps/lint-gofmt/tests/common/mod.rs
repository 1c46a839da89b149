//! Shared fixtures: a shell script standing in for `gofmt` and scratch repos.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tempfile::TempDir;

/// Lists the file when it contains `UNFORMATTED`, fails when it contains
/// `EXPLODE`, stays silent otherwise. Arguments are `-s -l <file>`.
const FAKE_GOFMT: &str = r#"#!/bin/sh
[ "$1" = "-s" ] && [ "$2" = "-l" ] || { echo "bad args: $*" >&2; exit 64; }
if grep -q EXPLODE "$3"; then
  echo "$3:1:1: expected 'package', found 'EOF'" >&2
  exit 2
fi
if grep -q UNFORMATTED "$3"; then
  echo "$3"
fi
exit 0
"#;

/// Written once, before any test spawns a process, so no child can hold the
/// script open for writing while it is executed.
pub fn fake_gofmt() -> &'static Path {
    static SCRIPT: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_dir, path) = SCRIPT.get_or_init(|| {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gofmt");
        fs::write(&path, FAKE_GOFMT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path
}

pub fn repo(files: &[(&str, &str)]) -> TempDir {
    fake_gofmt();
    let tmp = TempDir::new().unwrap();
    for (rel, body) in files {
        let p = tmp.path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, body).unwrap();
    }
    tmp
}
