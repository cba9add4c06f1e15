use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use trsh_core::TrshConfig;

use crate::cli::Cli;
use crate::services::ScriptService;

/// Application context that gets passed to command handlers
///
/// Holds the effective configuration (file, then environment, then flags) and
/// the script service built from it. Building a context never fails because
/// the script is missing; that only matters once a board command runs.
pub struct Context {
    pub script_service: ScriptService,
    config: TrshConfig,
    config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        // --config / TRSH_CONFIG, else the per-user location
        let config_path = cli.config.clone().or_else(TrshConfig::default_path);

        let mut config = match &config_path {
            Some(path) => TrshConfig::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => TrshConfig::default(),
        };
        config.apply_env_overrides(|name| env::var(name).ok());

        if let Some(script) = &cli.script {
            config.script.path = Some(script.clone());
        }
        if let Some(interpreter) = &cli.interpreter {
            config.script.interpreter = Some(interpreter.clone());
        }
        config.validate().context("Invalid configuration")?;

        debug!(
            script = ?config.script.path,
            interpreter = ?config.script.interpreter,
            "resolved board script"
        );

        let script_service = ScriptService::new(
            config.script.path.clone(),
            config.script.interpreter.clone(),
            config.script.env_var.clone(),
            cli.dry_run,
        );

        Ok(Self {
            script_service,
            config,
            config_path,
        })
    }

    /// Effective configuration
    pub fn config(&self) -> &TrshConfig {
        &self.config
    }

    /// Config file location, whether or not the file exists
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
