// crates/trsh-core/src/lib.rs - Core library for trsh
//
// Everything here is pure: list code resolution, the action model that turns a
// board command into an argument vector, the shortcut table, configuration and
// shell integration scripts. Spawning the board script is the CLI's job.

pub mod action;
pub mod config;
pub mod list;
pub mod shell;
pub mod shortcut;

pub use action::Action;
pub use config::{ConfigError, TrshConfig};
pub use list::{ListName, resolve_create, resolve_target};
pub use shortcut::{SHORTCUTS, Shortcut};
