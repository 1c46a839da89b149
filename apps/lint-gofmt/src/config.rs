//! Fixed check configuration and effective settings resolution.
//!
//! The file-selection patterns and the source suffix are constants. The only
//! tunables are presentation and the tool program, which may come from an
//! optional `lint-gofmt.toml|yaml|yml` at the repository root.
//! Defaults:
//! - `output`: `human`
//! - `gofmt`: `gofmt` (resolved through `PATH`)
//!
//! Overrides precedence: CLI > config file > defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Globs checked on every run, in order, relative to the repository root.
pub const FILE_PATTERNS: &[&str] = &["*.go", "cmd/dbmate/*.go"];

/// Only candidates whose name ends with this suffix are handed to the tool.
pub const SOURCE_SUFFIX: &str = ".go";

pub const DEFAULT_GOFMT: &str = "gofmt";

const CONFIG_NAMES: &[&str] = &["lint-gofmt.toml", "lint-gofmt.yaml", "lint-gofmt.yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the report is rendered on stdout.
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => bail!("unknown output mode '{other}' (expected human|json)"),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Settings file loaded from `lint-gofmt.toml|yaml`.
pub struct LintConfig {
    pub output: Option<String>,
    pub gofmt: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by a run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: OutputMode,
    pub gofmt: String,
    /// Path of the settings file that contributed, if any.
    pub config_path: Option<PathBuf>,
}

/// Locate the settings file in `root`, preferring TOML over YAML.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load the settings file from `root` if one exists.
///
/// A missing file is `Ok(None)`; a present but unreadable or malformed file
/// is an error.
pub fn load_config(root: &Path) -> anyhow::Result<Option<(PathBuf, LintConfig)>> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: LintConfig = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).with_context(|| format!("invalid {}", path.display()))?
    } else {
        serde_yaml::from_str(&s).with_context(|| format!("invalid {}", path.display()))?
    };
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, the settings file, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_gofmt: Option<&str>,
) -> anyhow::Result<Effective> {
    let repo_root = PathBuf::from(cli_repo_root.unwrap_or("."));
    if !repo_root.is_dir() {
        bail!("repository root is not a directory: {}", repo_root.display());
    }
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, LintConfig::default()),
    };

    let output = cli_output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let output = OutputMode::parse(&output)?;

    let gofmt = cli_gofmt
        .map(str::to_string)
        .or(cfg.gofmt)
        .unwrap_or_else(|| DEFAULT_GOFMT.to_string());

    Ok(Effective {
        repo_root,
        output,
        gofmt,
        config_path,
    })
}
