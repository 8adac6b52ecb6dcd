//! Sibling-job wait extension point.
//!
//! Waiting for the other jobs of a CI build matrix is deprecated and
//! provider-specific, so it lives behind the [`SiblingWaiter`] trait.
//! The plugin only holds an injected implementation; a real one would
//! poll the provider's API, the default does nothing.

use crate::error::Result;

/// Identifying context for the current CI job, passed to the waiter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContext {
    /// Build identifier shared by all sibling jobs.
    pub build_id: Option<String>,
    /// This job's identifier.
    pub job_id: Option<String>,
    /// The environments this job runs.
    pub envlist: Vec<String>,
}

/// Aggregate outcome of the sibling jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingOutcome {
    /// Every sibling job finished successfully.
    Passed,
    /// At least one sibling job failed.
    Failed,
}

/// Callback invoked after the test subcommand completes when the
/// wait-for-siblings feature is requested.
pub trait SiblingWaiter {
    /// Block until the sibling jobs of this build have finished.
    fn wait(&self, ctx: &JobContext) -> Result<SiblingOutcome>;
}

/// Waiter that never blocks and reports success.
///
/// Stands in for the deprecated polling implementation.
#[derive(Debug, Default)]
pub struct NoopWaiter;

impl SiblingWaiter for NoopWaiter {
    fn wait(&self, ctx: &JobContext) -> Result<SiblingOutcome> {
        tracing::debug!(?ctx, "sibling wait requested, no waiter configured");
        Ok(SiblingOutcome::Passed)
    }
}
