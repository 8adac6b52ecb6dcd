//! CI environment snapshot.
//!
//! Detects whether the process runs under a CI provider and captures the
//! variables the plugin cares about: the explicit environment selection
//! (which disables inference) and the CI-provided interpreter version.

use crate::interpreter::InterpreterIdentity;

/// Environment variable for explicit environment selection.
///
/// When set, inference is disabled and the runner uses the listed
/// environments verbatim.
pub const CRAMPON_ENV_VAR: &str = "CRAMPON_ENV";

/// Environment variables carrying the CI-provided interpreter version,
/// checked in order.
pub const INTERPRETER_VARS: &[&str] = &["CI_INTERPRETER", "TRAVIS_PYTHON_VERSION"];

/// Well-known CI indicator variables.
const CI_VARS: &[&str] = &[
    "CI",
    "TRAVIS",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "BUILDKITE",
];

/// Snapshot of the CI-provided environment, populated once per process.
///
/// # Example
///
/// ```
/// use crampon::ci::CiContext;
///
/// let ctx = CiContext::from_env();
/// if ctx.is_ci {
///     // apply environment inference
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CiContext {
    /// Whether a CI indicator variable is present.
    pub is_ci: bool,
    /// The variable that triggered CI detection.
    pub detected_via: Option<String>,
    /// Explicit environment selection from `CRAMPON_ENV`, if set.
    pub explicit_envlist: Option<String>,
    /// Raw interpreter version string provided by the CI service.
    pub interpreter_spec: Option<String>,
    /// Build identifier, for the sibling-job context.
    pub build_id: Option<String>,
    /// Job identifier, for the sibling-job context.
    pub job_id: Option<String>,
}

impl CiContext {
    /// Snapshot the real process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Snapshot with a custom env var lookup (for testing).
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let detected_via = CI_VARS
            .iter()
            .find(|var| env_fn(var).is_ok())
            .map(|var| var.to_string());

        let interpreter_spec = INTERPRETER_VARS
            .iter()
            .find_map(|var| env_fn(var).ok())
            .filter(|spec| !spec.is_empty());

        Self {
            is_ci: detected_via.is_some(),
            detected_via,
            explicit_envlist: env_fn(CRAMPON_ENV_VAR).ok().filter(|v| !v.is_empty()),
            interpreter_spec,
            build_id: env_fn("CI_BUILD_ID")
                .or_else(|_| env_fn("TRAVIS_BUILD_ID"))
                .ok(),
            job_id: env_fn("CI_JOB_ID").or_else(|_| env_fn("TRAVIS_JOB_ID")).ok(),
        }
    }

    /// Parse the CI-provided interpreter spec into an identity.
    ///
    /// Returns `None` when the CI service provided no interpreter version,
    /// in which case inference is skipped and the declared envlist stands.
    pub fn interpreter(&self) -> Option<InterpreterIdentity> {
        self.interpreter_spec
            .as_deref()
            .map(InterpreterIdentity::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn clean_env_is_not_ci() {
        let ctx = CiContext::from_env_with(make_env(&[]));
        assert!(!ctx.is_ci);
        assert!(ctx.detected_via.is_none());
        assert!(ctx.explicit_envlist.is_none());
        assert!(ctx.interpreter_spec.is_none());
    }

    #[test]
    fn detects_ci_from_ci_var() {
        let ctx = CiContext::from_env_with(make_env(&[("CI", "true")]));
        assert!(ctx.is_ci);
        assert_eq!(ctx.detected_via.as_deref(), Some("CI"));
    }

    #[test]
    fn detects_ci_from_travis_var() {
        let ctx = CiContext::from_env_with(make_env(&[("TRAVIS", "true")]));
        assert!(ctx.is_ci);
        assert_eq!(ctx.detected_via.as_deref(), Some("TRAVIS"));
    }

    #[test]
    fn detects_ci_from_github_actions() {
        let ctx = CiContext::from_env_with(make_env(&[("GITHUB_ACTIONS", "true")]));
        assert!(ctx.is_ci);
        assert_eq!(ctx.detected_via.as_deref(), Some("GITHUB_ACTIONS"));
    }

    #[test]
    fn captures_explicit_envlist() {
        let ctx = CiContext::from_env_with(make_env(&[
            ("CI", "true"),
            ("CRAMPON_ENV", "py39,lint"),
        ]));
        assert_eq!(ctx.explicit_envlist.as_deref(), Some("py39,lint"));
    }

    #[test]
    fn empty_explicit_envlist_is_ignored() {
        let ctx = CiContext::from_env_with(make_env(&[("CI", "true"), ("CRAMPON_ENV", "")]));
        assert!(ctx.explicit_envlist.is_none());
    }

    #[test]
    fn interpreter_spec_prefers_ci_interpreter() {
        let ctx = CiContext::from_env_with(make_env(&[
            ("CI", "true"),
            ("CI_INTERPRETER", "3.9"),
            ("TRAVIS_PYTHON_VERSION", "3.6"),
        ]));
        assert_eq!(ctx.interpreter_spec.as_deref(), Some("3.9"));
    }

    #[test]
    fn interpreter_spec_falls_back_to_travis_var() {
        let ctx = CiContext::from_env_with(make_env(&[
            ("TRAVIS", "true"),
            ("TRAVIS_PYTHON_VERSION", "pypy3"),
        ]));
        assert_eq!(ctx.interpreter_spec.as_deref(), Some("pypy3"));
    }

    #[test]
    fn interpreter_parses_into_identity() {
        let ctx = CiContext::from_env_with(make_env(&[("CI", "true"), ("CI_INTERPRETER", "3.8")]));
        let identity = ctx.interpreter().unwrap();
        assert_eq!(identity.implementation, "cpython");
        assert_eq!(identity.version, "3.8");
    }

    #[test]
    fn no_interpreter_yields_none() {
        let ctx = CiContext::from_env_with(make_env(&[("CI", "true")]));
        assert!(ctx.interpreter().is_none());
    }

    #[test]
    fn captures_build_and_job_ids() {
        let ctx = CiContext::from_env_with(make_env(&[
            ("TRAVIS", "true"),
            ("TRAVIS_BUILD_ID", "1234"),
            ("TRAVIS_JOB_ID", "1234.2"),
        ]));
        assert_eq!(ctx.build_id.as_deref(), Some("1234"));
        assert_eq!(ctx.job_id.as_deref(), Some("1234.2"));
    }
}
