// crates/trsh-cli/src/commands/init.rs - Shell integration
//
// Prints the shortcut functions to stdout so they can be eval'd:
//
//   eval "$(trsh init bash)"
//   trsh init fish | source

use anyhow::Result;

use crate::context::Context;

pub fn handle(ctx: &Context, shell: &str, program: Option<&str>) -> Result<()> {
    let program = program.unwrap_or(ctx.config().shell.program.as_str());
    let script = trsh_core::shell::generate_init(shell, program)?;
    print!("{script}");
    Ok(())
}
