//! Config command implementation.
//!
//! The `crampon config` command shows the resolved configuration after
//! CI inference has mutated it.

use std::path::{Path, PathBuf};

use crate::ci::CiContext;
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::{CramponError, Result};
use crate::hooks::{CiPlugin, RunnerHooks};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    env: Option<String>,
    ci_after: bool,
}

impl ConfigCommand {
    /// Create a new config command from the parsed CLI.
    pub fn new(project_root: &Path, cli: &Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: cli.config.clone(),
            env: cli.env.clone(),
            ci_after: cli.ci_after,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(CramponError::ConfigNotFound { .. }) => {
                ui.error("No runner.yml found. Create one at the project root.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let plugin = CiPlugin::new(CiContext::from_env());
        let opts = plugin.on_configure(self.env.clone(), self.ci_after);
        plugin.on_env_configured(&mut config, &opts);

        let rendered =
            serde_yaml::to_string(&config).map_err(|e| CramponError::Other(e.into()))?;
        ui.message(&rendered);

        Ok(CommandResult::success())
    }
}
