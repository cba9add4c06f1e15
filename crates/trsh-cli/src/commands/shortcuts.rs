// crates/trsh-cli/src/commands/shortcuts.rs - Static reference output
//
// `trsh shortcuts` and `trsh lists` describe the command surface itself, so
// they run without a Context and work even when the config file is broken.

use anyhow::{Result, bail};
use console::style;
use trsh_core::shortcut::{self, Shortcut};
use trsh_core::{ListName, SHORTCUTS, resolve_create, resolve_target};

/// List the shortcut commands, or describe a single one
///
/// Human output is a three-column table; `--json` prints the same data as
/// objects for scripting.
pub fn handle(name: Option<&str>, json: bool) -> Result<()> {
    let selected: Vec<&Shortcut> = match name {
        Some(name) => match shortcut::find(name) {
            Some(found) => vec![found],
            None => bail!("unknown shortcut: {name} (see `trsh shortcuts`)"),
        },
        None => SHORTCUTS.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for shortcut in &selected {
        println!(
            "{} {} {}",
            style(format!("{:<6}", shortcut.name)).bold().green(),
            style(format!("{:<18}", shortcut.usage)).dim(),
            shortcut.summary
        );
    }
    if name.is_none() {
        println!();
        println!("Install them as shell functions with: trsh init <bash|zsh|fish>");
    }

    Ok(())
}

/// Show which list each code selects, per command
pub fn lists() -> Result<()> {
    for list in ListName::ALL {
        let code = list.code().to_string();
        let mut commands = Vec::new();
        if resolve_target(Some(code.as_str())) == list {
            commands.extend(["list", "move"]);
        }
        if resolve_create(Some(code.as_str())) == list {
            commands.push("create");
        }
        println!(
            "{} {:<22} {}",
            style(&code).bold().green(),
            list.as_str(),
            commands.join(", ")
        );
    }
    println!();
    println!(
        "No code or any other code: list/move use {}, create uses {}",
        resolve_target(None),
        resolve_create(None)
    );
    Ok(())
}
