//! Environment list inference.
//!
//! Maps the detected interpreter identity to the environments the runner
//! should execute, honoring user-declared aliases, and handles environments
//! that were inferred but never declared in the configuration file.

use std::collections::HashMap;

use crate::config::{EnvConfig, RunnerConfig};
use crate::interpreter::InterpreterIdentity;

/// Infer the environments to run for the given interpreter identity.
///
/// Alias lookup tries the raw CI version spec first, then the canonical
/// key, so users can declare either `"3.8"` or `"py38"` as the mapping
/// key. A matching alias list is used verbatim (order preserved,
/// duplicates removed). Without a match, a single default name is
/// synthesized from the canonical key.
pub fn detect_envlist(
    identity: &InterpreterIdentity,
    aliases: &HashMap<String, Vec<String>>,
) -> Vec<String> {
    let key = identity.canonical_key();

    let declared = aliases
        .get(&identity.raw)
        .or_else(|| aliases.get(&key));

    match declared {
        Some(list) => dedup_preserve_order(list),
        None => vec![key],
    }
}

/// Compute the inferred environments not yet declared in configuration.
///
/// Returns exactly `envlist − declared`, preserving the order of
/// `envlist`.
pub fn undeclared_envs(envlist: &[String], config: &RunnerConfig) -> Vec<String> {
    envlist
        .iter()
        .filter(|name| !config.envs.contains_key(*name))
        .cloned()
        .collect()
}

/// Synthesize minimal environment sections for each undeclared name.
///
/// A compatibility shim: later processing expects every environment in
/// the envlist to have a section, so missing ones get an empty default.
pub fn autogen_env_configs(config: &mut RunnerConfig, undeclared: &[String]) {
    for name in undeclared {
        config
            .envs
            .entry(name.clone())
            .or_insert_with(EnvConfig::default);
    }
}

/// Remove duplicates while preserving first-seen order.
fn dedup_preserve_order(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
