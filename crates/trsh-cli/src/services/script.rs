// crates/trsh-cli/src/services/script.rs - Board Script Service
//
// Turns an Action into one process invocation of the external board script
// and runs it. The script owns everything about the board: authentication,
// HTTP, reporting, and its own success/failure messages. This layer only
// forwards, so a failing script is logged and never turns into an error.

use anyhow::{Result, anyhow};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};
use trsh_core::Action;

/// A fully resolved program and argument vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Shell-quoted rendering, safe to paste into a terminal
    pub fn display(&self) -> String {
        let words = std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|word| word.to_string_lossy().into_owned());
        shell_words::join(words)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Runs board actions through the external script
///
/// SCRIPT SELECTION (resolved by Context before this is built):
/// 1. --script flag
/// 2. $TRELLO_SCRIPT (or the variable named by script.env_var)
/// 3. script.path in the config file
pub struct ScriptService {
    script: Option<PathBuf>,
    interpreter: Option<String>,
    env_var: String,
    dry_run: bool,
}

impl ScriptService {
    pub fn new(
        script: Option<PathBuf>,
        interpreter: Option<String>,
        env_var: String,
        dry_run: bool,
    ) -> Self {
        Self {
            script,
            interpreter,
            env_var,
            dry_run,
        }
    }

    /// Build the invocation for `action` without running it
    ///
    /// With an interpreter: `<interpreter> <script> <keyword> [-arg1=..] [-arg2=..]`.
    /// Without one the script itself is the program.
    pub fn invocation(&self, action: &Action) -> Result<Invocation> {
        let script = self.script.as_ref().ok_or_else(|| {
            anyhow!(
                "No board script configured.\n\nTips:\n- export {}=/path/to/script\n- pass --script /path/to/script\n- set script.path in the config file (trsh config path)",
                self.env_var
            )
        })?;

        let action_args = action.args().into_iter().map(OsString::from);
        let invocation = match &self.interpreter {
            Some(interpreter) => Invocation {
                program: OsString::from(interpreter),
                args: std::iter::once(script.clone().into_os_string())
                    .chain(action_args)
                    .collect(),
            },
            None => Invocation {
                program: script.clone().into_os_string(),
                args: action_args.collect(),
            },
        };
        Ok(invocation)
    }

    /// Forward `action` to the board script and wait for it to finish
    ///
    /// Stdio is inherited, so the script's own output reaches the user
    /// directly. Launch failures and non-zero exits are logged as warnings
    /// and otherwise ignored.
    pub fn run(&self, action: &Action) -> Result<()> {
        let invocation = self.invocation(action)?;

        if self.dry_run {
            println!("{}", invocation.display());
            return Ok(());
        }

        debug!(command = %invocation.display(), "running board script");
        match invocation.command().status() {
            Ok(status) if status.success() => {
                info!(action = action.keyword(), "board script finished");
            }
            Ok(status) => {
                warn!(
                    action = action.keyword(),
                    "board script exited unsuccessfully ({status})"
                );
            }
            Err(e) => {
                warn!(
                    action = action.keyword(),
                    "failed to launch board script '{}': {e}",
                    invocation.program.to_string_lossy()
                );
            }
        }

        Ok(())
    }
}
