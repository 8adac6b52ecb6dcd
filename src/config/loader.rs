//! Configuration file discovery and loading.
//!
//! This module handles finding the runner configuration file and parsing
//! it. Validation of the structure is the runner's job; the plugin only
//! reads what the loader already produced.

use crate::config::schema::RunnerConfig;
use crate::error::{CramponError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the runner configuration file.
pub const CONFIG_FILE: &str = "runner.yml";

/// Find the project root by walking up from the starting directory.
///
/// Looks for:
/// 1. `runner.yml` (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into RunnerConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CramponError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CramponError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into RunnerConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<RunnerConfig> {
    serde_yaml::from_str(content).map_err(|e| CramponError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads that file directly. Otherwise
/// loads `runner.yml` from the project root.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RunnerConfig> {
    match config_override {
        Some(override_path) => load_config_file(override_path),
        None => load_config_file(&project_root.join(CONFIG_FILE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_finds_config_file() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("foo").join("bar");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_finds_git_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_config_over_git() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("nested").join("project");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(subdir.join(CONFIG_FILE), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(subdir));
    }

    #[test]
    fn load_config_file_parses_valid_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "envlist: [py38]").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.envlist, vec!["py38"]);
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/runner.yml"));
        assert!(matches!(result, Err(CramponError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let content = "invalid: yaml: content: [";
        let result = parse_config(content, Path::new("runner.yml"));
        assert!(matches!(result, Err(CramponError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_file_handles_empty_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.envlist.is_empty());
        assert!(config.envs.is_empty());
    }

    #[test]
    fn load_config_with_override_uses_given_path() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().join("custom.yml");
        fs::write(&override_path, "envlist: [custom]").unwrap();

        let config = load_config(temp.path(), Some(&override_path)).unwrap();
        assert_eq!(config.envlist, vec!["custom"]);
    }

    #[test]
    fn load_config_without_override_reads_runner_yml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "envlist: [py39]").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.envlist, vec!["py39"]);
    }

    #[test]
    fn load_config_file_parses_full_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            r#"
envlist: [py38]
envs:
  py38:
    commands: ["pytest"]
    ignore_outcome: true
ci:
  unignore_outcomes: true
  aliases:
    "3.8": [py38]
"#,
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.env("py38").unwrap().ignore_outcome);
        assert!(config.ci.unignore_outcomes);
    }
}
