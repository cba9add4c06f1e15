use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "trsh")]
#[command(about = "Short commands for a Trello-style board script")]
#[command(version)]
pub struct Cli {
    /// Board script path (overrides $TRELLO_SCRIPT and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Program that runs the board script, e.g. python3
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Config file to use instead of ~/.config/trsh/config.toml
    #[arg(long, global = true, env = trsh_core::config::CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the script invocation instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
///
/// Board commands carry their shell shortcut as an alias, so `trsh trlst w`
/// and `trsh list w` are the same request.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the whole board
    #[command(alias = "trb")]
    Board,

    /// Weekly report: archive recently done items and clear the Done list
    #[command(alias = "trmon")]
    Monday,

    /// Show one list
    #[command(alias = "trlst")]
    List {
        /// List code: i (In progress), w (Waiting for customer), t (Testing); anything else means Done
        #[arg(allow_hyphen_values = true)]
        code: Option<String>,
    },

    /// Create an item
    #[command(alias = "trcc")]
    Create {
        /// Item name, passed through unchanged (use `--` before names like `-v` or `--dry-run`)
        #[arg(allow_hyphen_values = true)]
        name: String,

        /// List code: w (Waiting for customer), t (Testing), d (Done); anything else means In progress
        #[arg(allow_hyphen_values = true)]
        code: Option<String>,
    },

    /// Delete an item
    #[command(alias = "trdc")]
    Delete {
        /// Item name, passed through unchanged (use `--` before names like `-v` or `--dry-run`)
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Move an item to another list
    #[command(alias = "trmc")]
    Move {
        /// Item name, passed through unchanged (use `--` before names like `-v` or `--dry-run`)
        #[arg(allow_hyphen_values = true)]
        name: String,

        /// List code: i (In progress), w (Waiting for customer), t (Testing); anything else means Done
        #[arg(allow_hyphen_values = true)]
        code: Option<String>,
    },

    /// Rename an item
    #[command(alias = "truc")]
    Rename {
        /// Current item name (use `--` before names that look like trsh flags)
        #[arg(allow_hyphen_values = true)]
        name: String,

        /// New item name
        #[arg(allow_hyphen_values = true)]
        new_name: String,
    },

    /// List the shortcut commands, or describe one
    Shortcuts {
        /// Shortcut to describe, e.g. trlst
        name: Option<String>,

        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },

    /// Show the list codes and the lists they select
    Lists,

    /// Print shell functions for every shortcut
    Init {
        /// Shell type (bash, zsh, fish)
        shell: String,

        /// Program the functions call (defaults to shell.program from config)
        #[arg(long)]
        program: Option<String>,
    },

    /// Config file operations
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate completion scripts for trsh itself
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Config file subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a commented config template (never overwrites)
    Init,

    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,
}
