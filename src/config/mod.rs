//! Host runner configuration.
//!
//! The runner's `runner.yml` is the existing file this plugin reads and
//! mutates in place; no new format is introduced here.
//!
//! - [`schema`] - Struct definitions mapping to the YAML format
//! - [`loader`] - File discovery and parsing

pub mod loader;
pub mod schema;

pub use loader::{find_project_root, load_config, load_config_file, parse_config};
pub use schema::{CiSettings, EnvConfig, RunnerConfig};
