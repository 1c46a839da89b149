//! Candidate discovery: expand the fixed globs against the repository root.
//!
//! Patterns are processed in order. Matches within one pattern come back
//! sorted so repeated runs over the same tree list files identically.

use anyhow::Context;
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Expand `patterns` under `root` and keep the files ending in `suffix`.
///
/// Returned paths are relative to `root`. Entries the glob walker cannot
/// read are skipped; an invalid pattern is an error. Wildcards never match
/// a leading dot, so hidden files are not candidates.
pub fn candidate_files(
    root: &Path,
    patterns: &[&str],
    suffix: &str,
) -> anyhow::Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut files = Vec::new();
    for pat in patterns {
        // Escape the root so metacharacters in directory names match literally
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        let pattern = Path::new(&escaped_root).join(pat).to_string_lossy().to_string();
        let mut matched: Vec<PathBuf> = glob_with(&pattern, options)
            .with_context(|| format!("bad glob pattern: {pat}"))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        matched.sort();
        for path in matched {
            if !has_suffix(&path, suffix) {
                continue;
            }
            let rel = pathdiff::diff_paths(&path, root).unwrap_or(path);
            files.push(rel);
        }
    }
    Ok(files)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FILE_PATTERNS, SOURCE_SUFFIX};
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, "package main\n").unwrap();
    }

    #[test]
    fn test_empty_tree_has_no_candidates() {
        let dir = tempdir().unwrap();
        let files = candidate_files(dir.path(), FILE_PATTERNS, SOURCE_SUFFIX).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_patterns_in_order_and_sorted_within() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "main.go");
        touch(root, "commands.go");
        touch(root, "cmd/dbmate/main.go");
        touch(root, "pkg/other/skip.go");
        touch(root, "README.md");

        let files = candidate_files(root, FILE_PATTERNS, SOURCE_SUFFIX).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("commands.go"),
                PathBuf::from("main.go"),
                PathBuf::from("cmd/dbmate/main.go"),
            ]
        );
    }

    #[test]
    fn test_suffix_filter_drops_other_matches() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "main.go");
        touch(root, "main.go.orig");
        touch(root, "notes.txt");

        let files = candidate_files(root, &["*"], ".go").unwrap();
        assert_eq!(files, vec![PathBuf::from("main.go")]);
    }

    #[test]
    fn test_directories_named_like_sources_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("vendor.go")).unwrap();
        touch(root, "a.go");
        let files = candidate_files(root, FILE_PATTERNS, SOURCE_SUFFIX).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.go")]);
    }

    #[test]
    fn test_hidden_files_are_not_candidates() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, ".hidden.go");
        touch(root, "cmd/dbmate/.cache.go");
        touch(root, "visible.go");
        let files = candidate_files(root, FILE_PATTERNS, SOURCE_SUFFIX).unwrap();
        assert_eq!(files, vec![PathBuf::from("visible.go")]);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let dir = tempdir().unwrap();
        let err = candidate_files(dir.path(), &["[.go"], ".go").unwrap_err();
        assert!(err.to_string().contains("bad glob pattern"));
    }
}
