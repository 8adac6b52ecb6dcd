//! Configuration schema definitions for the host runner.
//!
//! This module contains the struct definitions that map to the runner's
//! YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Root configuration structure for runner.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Environments to run when nothing selects otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envlist: Vec<String>,

    /// Environment section definitions, keyed by name.
    ///
    /// BTreeMap for deterministic ordering; execution order comes from
    /// `envlist`, not from this map.
    #[serde(default)]
    pub envs: BTreeMap<String, EnvConfig>,

    /// CI integration settings.
    #[serde(default, skip_serializing_if = "CiSettings::is_empty")]
    pub ci: CiSettings,
}

impl RunnerConfig {
    /// Look up an environment section by name.
    pub fn env(&self, name: &str) -> Option<&EnvConfig> {
        self.envs.get(name)
    }

    /// The set of declared environment names.
    pub fn declared_envs(&self) -> impl Iterator<Item = &str> {
        self.envs.keys().map(String::as_str)
    }
}

/// A single test environment section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Commands the runner executes for this environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Extra environment variables for the commands.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,

    /// When true, a failure of this environment does not fail the run.
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore_outcome: bool,
}

/// CI integration settings (`ci:` section of runner.yml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CiSettings {
    /// When set, every environment's `ignore_outcome` is forced to false.
    ///
    /// Lets a CI-wide setting re-enable failure propagation that an
    /// environment-specific setting had suppressed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub unignore_outcomes: bool,

    /// Alias mappings from an interpreter identity string (the raw CI
    /// version spec or the canonical key) to the environments to run.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, Vec<String>>,
}

impl CiSettings {
    /// True when the section carries no settings (used to omit it when
    /// serializing resolved configuration).
    pub fn is_empty(&self) -> bool {
        !self.unignore_outcomes && self.aliases.is_empty()
    }
}

fn is_false(b: &bool) -> bool {
    !(*b)
}
