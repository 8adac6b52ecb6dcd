//! Crampon - CI-aware test environment inference.
//!
//! Crampon adapts a matrix-style test runner's configuration loading to the
//! conventions of a CI service: it infers which environments to run from the
//! CI-provided interpreter version and applies a CI-wide override that
//! re-enables failure propagation.
//!
//! # Modules
//!
//! - [`after`] - Sibling-job wait extension point (deprecated feature stub)
//! - [`ci`] - CI context detection from environment variables
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Host runner configuration loading and schema
//! - [`envlist`] - Environment list inference
//! - [`error`] - Error types and result aliases
//! - [`hooks`] - The two runner hook implementations
//! - [`interpreter`] - Interpreter identity parsing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use crampon::envlist::detect_envlist;
//! use crampon::interpreter::InterpreterIdentity;
//!
//! let identity = InterpreterIdentity::parse("3.9");
//! let envlist = detect_envlist(&identity, &HashMap::new());
//! assert_eq!(envlist, vec!["py39"]);
//! ```

pub mod after;
pub mod ci;
pub mod cli;
pub mod config;
pub mod envlist;
pub mod error;
pub mod hooks;
pub mod interpreter;
pub mod ui;

pub use error::{CramponError, Result};
