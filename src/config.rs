//! Configuration discovery and effective settings resolution.
//!
//! Sitesmoke reads `sitesmoke.toml|yaml|yml` from the target directory (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `dir`: `.`
//! - `extension`: `.html`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `sitesmoke.toml|yaml`.
pub struct SitesmokeConfig {
    pub dir: Option<String>,
    pub extension: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    /// Directory whose entries are scanned.
    pub dir: PathBuf,
    /// File suffix filter, e.g. `.html`.
    pub extension: String,
    /// Output mode: `human` or `json`.
    pub output: String,
}

/// Walk upward from `start` to find the config root.
///
/// Stops when a `sitesmoke.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("sitesmoke.toml").exists()
            || cur.join("sitesmoke.yaml").exists()
            || cur.join("sitesmoke.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file at `root`, if one exists.
///
/// Lets callers distinguish "no config" from "config present but
/// unparseable" when `load_config` returns `None`.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    for name in ["sitesmoke.toml", "sitesmoke.yaml", "sitesmoke.yml"] {
        let p = root.join(name);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

/// Load `SitesmokeConfig` from `sitesmoke.toml` or `sitesmoke.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SitesmokeConfig> {
    let path = find_config_file(root)?;
    let s = fs::read_to_string(&path).ok()?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&s).ok()
    } else {
        serde_yaml::from_str(&s).ok()
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_extension: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_dir.unwrap_or("."));
    let root = detect_config_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let dir = resolve_dir(cli_dir, cfg.dir.as_deref(), &root, start);

    let extension = cli_extension
        .map(|s| s.to_string())
        .or(cfg.extension)
        .unwrap_or_else(|| ".html".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        dir,
        extension,
        output,
    }
}

/// Resolve the scan directory: a CLI dir wins outright; a config `dir` is
/// joined to the config root; otherwise the starting directory is used.
pub fn resolve_dir(
    cli_dir: Option<&str>,
    cfg_dir: Option<&str>,
    root: &Path,
    start: PathBuf,
) -> PathBuf {
    match cli_dir {
        Some(d) => PathBuf::from(d),
        None => match cfg_dir {
            Some(d) => root.join(d),
            None => start,
        },
    }
}
