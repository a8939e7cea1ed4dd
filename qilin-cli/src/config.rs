//! Configuration file loading for qilin.
//!
//! `qilin.toml` holds a single `[run]` table with defaults for `qilin run`.
//! Explicit command-line flags always win over it.

use crate::render::OutputFormat;
use crate::session::{Backend, SessionOptions};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "qilin.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QilinConfig {
    pub run: RunConfig,
}

/// `[run]` section: defaults for `qilin run`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub backend: Backend,
    pub format: OutputFormat,
    /// Continue past stack errors instead of stopping.
    pub keep_going: bool,
}

/// Path of `qilin.toml` in `dir`, when the file exists.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!(path = %candidate, "using run defaults");
        return Some(candidate);
    }
    debug!(dir = %dir, "no qilin.toml, using built-in run defaults");
    None
}

/// Read run defaults from an explicit file. A missing file is an error here.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<QilinConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("open run defaults {}", path))?;
    parse_config(&contents).with_context(|| format!("run defaults in {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<QilinConfig> {
    toml::from_str(contents).context("expected a [run] table with backend, format, keep_going")
}

/// Run defaults for `qilin run`: the `--config` file when given, otherwise
/// `qilin.toml` in `cwd`, otherwise the built-in defaults.
pub fn resolve_config(explicit: Option<&Utf8Path>, cwd: &Utf8Path) -> anyhow::Result<QilinConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    discover_config(cwd)
        .map(|path| load_config(&path))
        .unwrap_or_else(|| Ok(QilinConfig::default()))
}

/// Settings for one `qilin run`, after merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergedConfig {
    pub backend: Backend,
    pub format: OutputFormat,
    pub keep_going: bool,
}

impl MergedConfig {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            backend: self.backend,
            keep_going: self.keep_going,
        }
    }
}

/// Builder for merging config file with CLI arguments.
#[derive(Debug)]
pub struct ConfigMerger {
    config: QilinConfig,
}

impl ConfigMerger {
    pub fn new(config: QilinConfig) -> Self {
        Self { config }
    }

    /// Explicit CLI values replace file values; `--keep-going` can only
    /// turn the flag on.
    pub fn merge_run_args(
        self,
        cli_backend: Option<Backend>,
        cli_format: Option<OutputFormat>,
        cli_keep_going: bool,
    ) -> MergedConfig {
        let run = self.config.run;
        MergedConfig {
            backend: cli_backend.unwrap_or(run.backend),
            format: cli_format.unwrap_or(run.format),
            keep_going: cli_keep_going || run.keep_going,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = r#"
[run]
backend = "linked"
format = "json"
keep_going = true
"#;
        let config = parse_config(contents).unwrap();
        assert_eq!(config.run.backend, Backend::Linked);
        assert_eq!(config.run.format, OutputFormat::Json);
        assert!(config.run.keep_going);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.run.backend, Backend::Array);
        assert_eq!(config.run.format, OutputFormat::Text);
        assert!(!config.run.keep_going);
    }

    #[test]
    fn test_parse_rejects_unknown_backend() {
        let err = parse_config("[run]\nbackend = \"deque\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("expected a [run] table"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(parse_config("[run]\nbakend = \"array\"\n").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = parse_config("[run]\nbackend = \"linked\"\nformat = \"json\"\n").unwrap();
        let merged = ConfigMerger::new(config).merge_run_args(
            Some(Backend::Array),
            None,
            true,
        );
        assert_eq!(merged.backend, Backend::Array);
        assert_eq!(merged.format, OutputFormat::Json);
        assert!(merged.keep_going);
        assert!(merged.session_options().keep_going);
    }

    #[test]
    fn test_resolve_without_file_uses_builtins() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let config = resolve_config(None, dir).unwrap();
        assert_eq!(config.run.backend, Backend::Array);
    }

    #[test]
    fn test_resolve_discovers_file_in_cwd() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "[run]\nkeep_going = true\n").unwrap();
        let config = resolve_config(None, dir).unwrap();
        assert!(config.run.keep_going);
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "[run]\nbackend = \"array\"\n").unwrap();
        let custom = dir.join("custom.toml");
        std::fs::write(&custom, "[run]\nbackend = \"linked\"\n").unwrap();
        let config = resolve_config(Some(custom.as_path()), dir).unwrap();
        assert_eq!(config.run.backend, Backend::Linked);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let missing = dir.join("nope.toml");
        let err = resolve_config(Some(missing.as_path()), dir).unwrap_err();
        assert!(format!("{err:#}").contains("open run defaults"));
    }
}
