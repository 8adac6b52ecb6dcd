//! Interpreter identity parsing.
//!
//! The CI service reports the interpreter running the test process as a
//! short version string such as `3.8`, `pypy3`, or `pypy3.5-5.8.0`. This
//! module parses those strings into an [`InterpreterIdentity`] and derives
//! the canonical environment key (`py38`, `pypy3`, ...) used for inference.

use std::sync::LazyLock;

use regex::Regex;

/// Bare CPython version: `3.8`, `3.10.2`.
static CPYTHON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.\d+)?$").unwrap());

/// PyPy spec: `pypy`, `pypy3`, `pypy3.5`, `pypy3.5-5.8.0`.
static PYPY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pypy(\d+(?:\.\d+)?)?(?:-.*)?$").unwrap());

/// Generic spec: implementation name optionally followed by a version,
/// e.g. `jython-2.7`, `graalpy23.1`.
static GENERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)[-_ ]?(\d+(?:\.\d+)*)?$").unwrap());

/// The implementation and version of the interpreter running the tests.
///
/// Computed once per process from the CI-provided version string and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterIdentity {
    /// Implementation name, lowercase (`cpython`, `pypy`, ...).
    pub implementation: String,
    /// Version string, possibly empty (`3.8`, `3`, ``).
    pub version: String,
    /// The raw spec string the identity was parsed from.
    pub raw: String,
}

impl InterpreterIdentity {
    /// Build an identity from explicit parts.
    pub fn new(implementation: &str, version: &str) -> Self {
        Self {
            implementation: implementation.to_lowercase(),
            version: version.to_string(),
            raw: format!("{implementation}-{version}"),
        }
    }

    /// Parse a CI-provided interpreter spec string.
    ///
    /// Unrecognized specs degrade to a generic identity (the whole spec as
    /// implementation name with no version) rather than failing, so
    /// inference always produces a fallback name.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        let lower = spec.to_lowercase();

        if let Some(caps) = CPYTHON_RE.captures(&lower) {
            return Self {
                implementation: "cpython".to_string(),
                version: format!("{}.{}", &caps[1], &caps[2]),
                raw: spec.to_string(),
            };
        }

        if let Some(caps) = PYPY_RE.captures(&lower) {
            return Self {
                implementation: "pypy".to_string(),
                version: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
                raw: spec.to_string(),
            };
        }

        if let Some(caps) = GENERIC_RE.captures(&lower) {
            return Self {
                implementation: caps[1].to_string(),
                version: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
                raw: spec.to_string(),
            };
        }

        // Last resort: treat the whole spec as an implementation name.
        Self {
            implementation: lower,
            version: String::new(),
            raw: spec.to_string(),
        }
    }

    /// The canonical environment key for this identity.
    ///
    /// - CPython `X.Y` becomes `pyXY`
    /// - PyPy 2.x (or bare `pypy`) becomes `pypy`, PyPy 3.x becomes `pypy3`
    /// - Anything else becomes implementation name plus version digits
    pub fn canonical_key(&self) -> String {
        match self.implementation.as_str() {
            "cpython" => format!("py{}", version_digits(&self.version)),
            "pypy" => {
                if self.version.starts_with('3') {
                    "pypy3".to_string()
                } else {
                    "pypy".to_string()
                }
            }
            other => format!("{}{}", other, version_digits(&self.version)),
        }
    }
}

/// Major and minor version with the dots stripped: `3.8.1` -> `38`.
fn version_digits(version: &str) -> String {
    version
        .split('.')
        .take(2)
        .flat_map(|part| part.chars())
        .filter(|c| c.is_ascii_digit())
        .collect()
}
