// crates/trsh-core/src/shell.rs - Shell integration scripts
//
// `trsh init <shell>` prints one function per shortcut so that `trlst w`
// works directly in the user's shell:
//
//   eval "$(trsh init bash)"        # ~/.bashrc
//   eval "$(trsh init zsh)"         # ~/.zshrc
//   trsh init fish | source         # ~/.config/fish/config.fish

use std::str::FromStr;
use thiserror::Error;

use crate::shortcut::{SHORTCUTS, Shortcut};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unsupported shell: {0} (supported: bash, zsh, fish)")]
    Unsupported(String),

    #[error("program name for shell functions cannot be empty")]
    EmptyProgram,
}

/// Shells we can generate functions for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(ShellError::Unsupported(s.to_string())),
        }
    }
}

/// Build the init script for `shell`, with every function calling `program`
pub fn generate_init(shell: &str, program: &str) -> Result<String, ShellError> {
    let shell: Shell = shell.parse()?;
    if program.is_empty() {
        return Err(ShellError::EmptyProgram);
    }
    let program = shell_words::quote(program);

    let mut script = format!("# trsh shell integration ({})\n", shell_name(shell));
    for shortcut in SHORTCUTS {
        script.push_str(&format!("# {} {}\n", shortcut.name, shortcut.usage));
        script.push_str(&match shell {
            Shell::Bash | Shell::Zsh => generate_posix(shortcut, &program),
            Shell::Fish => generate_fish(shortcut, &program),
        });
    }
    Ok(script)
}

fn generate_posix(shortcut: &Shortcut, program: &str) -> String {
    format!(
        r#"function {name}() {{
    \command {program} {command} "$@"
}}
"#,
        name = shortcut.name,
        command = shortcut.command,
    )
}

fn generate_fish(shortcut: &Shortcut, program: &str) -> String {
    format!(
        r#"function {name} --description '{summary}'
    command {program} {command} $argv
end
"#,
        name = shortcut.name,
        summary = shortcut.summary.replace('\'', "\\'"),
        command = shortcut.command,
    )
}

fn shell_name(shell: Shell) -> &'static str {
    match shell {
        Shell::Bash => "bash",
        Shell::Zsh => "zsh",
        Shell::Fish => "fish",
    }
}
