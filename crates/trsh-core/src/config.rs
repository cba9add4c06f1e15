// crates/trsh-core/src/config.rs - Configuration System
//
// Everything trsh needs to know about the board script lives here: where the
// script is, what (if anything) runs it, and which program the generated
// shell functions call.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--script, --interpreter)
// 2. Environment variables ($TRELLO_SCRIPT or the configured name, TRSH_INTERPRETER)
// 3. Config file (~/.config/trsh/config.toml, or --config / TRSH_CONFIG)
// 4. Built-in defaults
//
// The CLI owns step 1; this module handles 2 to 4.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the board script path unless configured otherwise
pub const DEFAULT_SCRIPT_ENV: &str = "TRELLO_SCRIPT";

/// Environment variable overriding `script.interpreter`
pub const INTERPRETER_ENV: &str = "TRSH_INTERPRETER";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "TRSH_CONFIG";

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Could not serialize configuration: {0}")]
    SerializeError(String),

    #[error("I/O error accessing config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrshConfig {
    /// How to find and run the board script
    #[serde(default)]
    pub script: ScriptConfig,

    /// Shell integration settings
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Board script path, used when the environment variable is unset
    pub path: Option<PathBuf>,

    /// Program that runs the script, e.g. "python3"
    ///
    /// When unset the script is executed directly and must be executable.
    pub interpreter: Option<String>,

    /// Name of the environment variable holding the script path
    #[serde(default = "default_env_var")]
    pub env_var: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Program the generated shell functions invoke
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_env_var() -> String {
    DEFAULT_SCRIPT_ENV.to_string()
}

fn default_program() -> String {
    "trsh".to_string()
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            path: None,
            interpreter: None,
            env_var: default_env_var(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl TrshConfig {
    /// Standard config file location
    ///
    /// - Linux: ~/.config/trsh/config.toml
    /// - macOS: ~/Library/Application Support/trsh/config.toml
    /// - Windows: %APPDATA%\trsh\config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trsh").join("config.toml"))
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: TrshConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: path.display().to_string(),
            error: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config file");

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// `lookup` is normally `|name| std::env::var(name).ok()`. Empty values
    /// count as unset, matching how an empty `$TRELLO_SCRIPT` behaves in a shell.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(path) = non_empty(&self.script.env_var) {
            debug!(var = %self.script.env_var, "script path taken from environment");
            self.script.path = Some(PathBuf::from(path));
        }

        if let Some(interpreter) = non_empty(INTERPRETER_ENV) {
            debug!(var = INTERPRETER_ENV, "interpreter taken from environment");
            self.script.interpreter = Some(interpreter);
        }
    }

    /// Catch values that would make every command fail
    pub fn validate(&self) -> ConfigResult<()> {
        let env_var = &self.script.env_var;
        if env_var.is_empty() {
            return Err(ConfigError::ValidationError(
                "script.env_var cannot be empty".to_string(),
            ));
        }
        if env_var.contains('=') || env_var.contains('\0') {
            return Err(ConfigError::ValidationError(format!(
                "script.env_var {env_var:?} is not a valid environment variable name"
            )));
        }

        if self.script.interpreter.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "script.interpreter cannot be empty (remove it to run the script directly)"
                    .to_string(),
            ));
        }

        if self.shell.program.is_empty() {
            return Err(ConfigError::ValidationError(
                "shell.program cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Write the commented template to `path`, never overwriting
    pub fn write_default(path: &Path) -> ConfigResult<()> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::default_toml())?;
        Ok(())
    }

    /// Commented config template
    pub fn default_toml() -> String {
        r#"# trsh configuration

[script]
# Board script to run. $TRELLO_SCRIPT (see env_var) takes precedence.
# path = "/path/to/trello.py"

# Program that runs the script. Leave unset to execute the script directly.
# TRSH_INTERPRETER takes precedence.
# interpreter = "python3"

# Environment variable consulted for the script path
env_var = "TRELLO_SCRIPT"

[shell]
# Program the functions from `trsh init <shell>` call
program = "trsh"
"#
        .to_string()
    }
}
