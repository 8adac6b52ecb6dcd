//! CI context detection.
//!
//! Reads the CI-provided environment variables once at startup into an
//! explicit [`CiContext`] struct, so the rest of the crate never touches
//! process-wide state directly.

mod context;

pub use context::{CiContext, CRAMPON_ENV_VAR, INTERPRETER_VARS};
