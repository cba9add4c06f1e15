// crates/trsh-core/src/shortcut.rs - Short shell names for board commands
//
// The shortcuts are what users actually type (`trlst w`, `trcc ABC-12`). The
// CLI accepts them as subcommand aliases and `trsh init` turns them into
// shell functions.

use serde::Serialize;

/// A short command name and the `trsh` subcommand behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Name of the shell function / subcommand alias
    pub name: &'static str,
    /// `trsh` subcommand it forwards to
    pub command: &'static str,
    /// Positional argument synopsis, `<required>` and `[optional]`
    pub usage: &'static str,
    /// One-line description
    pub summary: &'static str,
}

/// Every shortcut, in the order they are documented and generated
pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        name: "trb",
        command: "board",
        usage: "",
        summary: "Show the whole board",
    },
    Shortcut {
        name: "trmon",
        command: "monday",
        usage: "",
        summary: "Weekly report, archive done items and clear the Done list",
    },
    Shortcut {
        name: "trlst",
        command: "list",
        usage: "[i|w|t]",
        summary: "Show a list (default: Done)",
    },
    Shortcut {
        name: "trcc",
        command: "create",
        usage: "<name> [w|t|d]",
        summary: "Create an item (default list: In progress)",
    },
    Shortcut {
        name: "trdc",
        command: "delete",
        usage: "<name>",
        summary: "Delete an item",
    },
    Shortcut {
        name: "trmc",
        command: "move",
        usage: "<name> [i|w|t]",
        summary: "Move an item (default list: Done)",
    },
    Shortcut {
        name: "truc",
        command: "rename",
        usage: "<name> <new-name>",
        summary: "Rename an item",
    },
];

/// Look up a shortcut by its short name
pub fn find(name: &str) -> Option<&'static Shortcut> {
    SHORTCUTS.iter().find(|shortcut| shortcut.name == name)
}
