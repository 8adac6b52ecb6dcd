//! List command implementation.
//!
//! The `crampon list` command shows the environments the runner would
//! execute once CI inference has been applied.

use std::path::{Path, PathBuf};

use crate::ci::CiContext;
use crate::cli::args::{Cli, ListArgs};
use crate::config::load_config;
use crate::error::{CramponError, Result};
use crate::hooks::{CiPlugin, RunnerHooks};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    env: Option<String>,
    ci_after: bool,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command from the parsed CLI.
    pub fn new(project_root: &Path, cli: &Cli, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: cli.config.clone(),
            env: cli.env.clone(),
            ci_after: cli.ci_after,
            args,
        }
    }
}

impl Command for ListCommand {
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

        let envlist = resolve_envlist(&config, opts.envlist.as_deref())?;

        match self.args.format.as_str() {
            "json" => {
                let rendered = serde_json::to_string_pretty(&envlist)
                    .map_err(|e| CramponError::Other(e.into()))?;
                ui.message(&rendered);
            }
            _ => {
                for name in &envlist {
                    ui.message(name);
                }
            }
        }

        Ok(CommandResult::success())
    }
}

/// The final environment list: explicit selection when given, otherwise
/// the (possibly inferred) envlist, falling back to every declared section.
pub fn resolve_envlist(
    config: &crate::config::RunnerConfig,
    selection: Option<&str>,
) -> Result<Vec<String>> {
    if let Some(selection) = selection {
        let names: Vec<String> = selection
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        for name in &names {
            if config.env(name).is_none() {
                return Err(CramponError::UnknownEnvironment { name: name.clone() });
            }
        }
        return Ok(names);
    }

    if !config.envlist.is_empty() {
        return Ok(config.envlist.clone());
    }

    Ok(config.declared_envs().map(String::from).collect())
}
