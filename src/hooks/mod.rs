//! Runner hook implementations.
//!
//! The host test runner exposes two extension points: one invoked once per
//! run while options are assembled, one invoked after configuration is
//! loaded. [`CiPlugin`] supplies both bodies, inferring the envlist from
//! the CI-provided interpreter and applying the CI-wide outcome override.

use crate::after::{JobContext, NoopWaiter, SiblingOutcome, SiblingWaiter};
use crate::ci::CiContext;
use crate::config::RunnerConfig;
use crate::envlist::{autogen_env_configs, detect_envlist, undeclared_envs};
use crate::error::Result;

/// Options the plugin contributes to (and reads from) the runner's
/// command-line layer.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    /// Explicit environment selection; disables inference when set.
    pub envlist: Option<String>,
    /// Exit only after all sibling CI jobs completed successfully.
    pub ci_after: bool,
}

/// The two extension points the host runner exposes.
pub trait RunnerHooks {
    /// Invoked once per run: merge CLI values with environment-derived
    /// overrides into the final option set.
    fn on_configure(&self, cli_envlist: Option<String>, ci_after: bool) -> OptionSet;

    /// Invoked after the runner loaded its configuration: mutate it in
    /// place according to the CI context.
    fn on_env_configured(&self, config: &mut RunnerConfig, opts: &OptionSet);
}

/// CI integration plugin.
///
/// Holds the environment snapshot taken at startup and the injected
/// sibling-job waiter.
pub struct CiPlugin {
    ctx: CiContext,
    waiter: Box<dyn SiblingWaiter>,
}

impl CiPlugin {
    /// Create a plugin for the given CI context with the no-op waiter.
    pub fn new(ctx: CiContext) -> Self {
        Self {
            ctx,
            waiter: Box::new(NoopWaiter),
        }
    }

    /// Replace the sibling-job waiter.
    pub fn with_waiter(mut self, waiter: Box<dyn SiblingWaiter>) -> Self {
        self.waiter = waiter;
        self
    }

    /// The CI context this plugin was built from.
    pub fn ctx(&self) -> &CiContext {
        &self.ctx
    }

    /// Invoked after the test subcommand completes.
    ///
    /// When the wait-for-siblings feature was requested, delegates to the
    /// injected waiter; otherwise does nothing.
    pub fn after_test(
        &self,
        config: &RunnerConfig,
        opts: &OptionSet,
    ) -> Result<Option<SiblingOutcome>> {
        if !opts.ci_after {
            return Ok(None);
        }

        let job = JobContext {
            build_id: self.ctx.build_id.clone(),
            job_id: self.ctx.job_id.clone(),
            envlist: config.envlist.clone(),
        };
        self.waiter.wait(&job).map(Some)
    }
}

impl RunnerHooks for CiPlugin {
    fn on_configure(&self, cli_envlist: Option<String>, ci_after: bool) -> OptionSet {
        // CLI selection wins over the selection environment variable.
        let envlist = cli_envlist.or_else(|| self.ctx.explicit_envlist.clone());

        if ci_after {
            eprintln!(
                "The wait-for-sibling-jobs feature is deprecated. Prefer your \
                 CI provider's build stages."
            );
        }

        OptionSet { envlist, ci_after }
    }

    fn on_env_configured(&self, config: &mut RunnerConfig, opts: &OptionSet) {
        if !self.ctx.is_ci {
            return;
        }

        // Envlist inference, unless an explicit selection disables it.
        if opts.envlist.is_none() {
            if let Some(identity) = self.ctx.interpreter() {
                let envlist = detect_envlist(&identity, &config.ci.aliases);
                let undeclared = undeclared_envs(&envlist, config);
                if !undeclared.is_empty() {
                    eprintln!(
                        "Matching undeclared environments is deprecated. Declare \
                         every environment the runner should use in runner.yml."
                    );
                    autogen_env_configs(config, &undeclared);
                }
                tracing::debug!(?envlist, interpreter = %identity.raw, "inferred envlist");
                config.envlist = envlist;
            }
        }

        // CI-wide override: re-enable failure propagation everywhere.
        if config.ci.unignore_outcomes {
            for env in config.envs.values_mut() {
                env.ignore_outcome = false;
            }
        }
    }
}
