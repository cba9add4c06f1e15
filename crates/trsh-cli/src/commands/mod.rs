// crates/trsh-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - board: board-wide requests (show board, weekly process, show list)
// - card: item requests (create, delete, move, rename)
// - shortcuts: the shortcut table
// - init: shell function generation
// - config: config file location, template and effective values
// - completions: completion scripts for trsh itself

pub mod board;
pub mod card;
#[cfg(feature = "completions")]
pub mod completions;
pub mod config;
pub mod init;
pub mod shortcuts;
