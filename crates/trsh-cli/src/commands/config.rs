// crates/trsh-cli/src/commands/config.rs - Config file commands
//
// `init` and `path` only need the file location, so they work even when the
// existing file is broken. `show` needs the full effective configuration and
// prints it as TOML under a comment naming the file it was read from.

use anyhow::{Context as AnyhowContext, Result, anyhow};
use std::path::PathBuf;
use trsh_core::TrshConfig;

use crate::cli::{Cli, ConfigCommands};
use crate::context::Context;

pub fn handle(cli: &Cli, cmd: &ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init => {
            let path = config_path(cli)?;
            TrshConfig::write_default(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote config template to {}", path.display());
        }
        ConfigCommands::Path => {
            println!("{}", config_path(cli)?.display());
        }
        ConfigCommands::Show => {
            let ctx = Context::new(cli)?;
            if let Some(path) = ctx.config_path() {
                let note = if path.exists() { "" } else { " (not found, defaults)" };
                println!("# {}{note}", path.display());
            }
            print!("{}", ctx.config().to_toml()?);
        }
    }
    Ok(())
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    cli.config
        .clone()
        .or_else(TrshConfig::default_path)
        .ok_or_else(|| anyhow!("Could not determine the config directory; pass --config"))
}
