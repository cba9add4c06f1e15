// crates/trsh-core/src/action.rs - Board actions and their argument vectors
//
// An Action is one request to the board script. It knows its keyword (the
// script's first positional argument) and how to render the named arguments
// that follow it. List codes are resolved when the action is built, so an
// Action always carries a canonical ListName.

use crate::list::{ListName, resolve_create, resolve_target};

/// One request to the external board script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show every list on the board
    ShowBoard,
    /// Weekly report, archive recently done items and clear the Done list
    Monday,
    /// Show a single list
    ShowList { list: ListName },
    /// Create an item on a list
    CreateCard { name: String, list: ListName },
    /// Delete an item
    DeleteCard { name: String },
    /// Move an item to another list
    MoveCard { name: String, list: ListName },
    /// Rename an item
    UpdateCard { name: String, new_name: String },
}

impl Action {
    /// `show list` with an optional code from {i, w, t}; defaults to Done
    pub fn show_list(code: Option<&str>) -> Self {
        Action::ShowList {
            list: resolve_target(code),
        }
    }

    /// `create item` with an optional code from {w, t, d}; defaults to In progress
    pub fn create_card(name: impl Into<String>, code: Option<&str>) -> Self {
        Action::CreateCard {
            name: name.into(),
            list: resolve_create(code),
        }
    }

    pub fn delete_card(name: impl Into<String>) -> Self {
        Action::DeleteCard { name: name.into() }
    }

    /// `move item` with an optional code from {i, w, t}; defaults to Done
    pub fn move_card(name: impl Into<String>, code: Option<&str>) -> Self {
        Action::MoveCard {
            name: name.into(),
            list: resolve_target(code),
        }
    }

    pub fn update_card(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Action::UpdateCard {
            name: name.into(),
            new_name: new_name.into(),
        }
    }

    /// The script's method name for this action
    pub fn keyword(&self) -> &'static str {
        match self {
            Action::ShowBoard => "show_board",
            Action::Monday => "monday",
            Action::ShowList { .. } => "show_list",
            Action::CreateCard { .. } => "create_card",
            Action::DeleteCard { .. } => "delete_card",
            Action::MoveCard { .. } => "move_card",
            Action::UpdateCard { .. } => "update_card",
        }
    }

    /// Full argument vector: keyword followed by `-arg1=` / `-arg2=` as needed
    ///
    /// Item names are copied verbatim. Each argument becomes exactly one argv
    /// entry, so names with spaces or shell metacharacters need no quoting.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.keyword().to_string()];
        match self {
            Action::ShowBoard | Action::Monday => {}
            Action::ShowList { list } => {
                args.push(arg1(list.as_str()));
            }
            Action::CreateCard { name, list } | Action::MoveCard { name, list } => {
                args.push(arg1(name));
                args.push(arg2(list.as_str()));
            }
            Action::DeleteCard { name } => {
                args.push(arg1(name));
            }
            Action::UpdateCard { name, new_name } => {
                args.push(arg1(name));
                args.push(arg2(new_name));
            }
        }
        args
    }

    /// Resolved list, for actions that target one
    pub fn list(&self) -> Option<ListName> {
        match self {
            Action::ShowList { list }
            | Action::CreateCard { list, .. }
            | Action::MoveCard { list, .. } => Some(*list),
            _ => None,
        }
    }
}

fn arg1(value: &str) -> String {
    format!("-arg1={value}")
}

fn arg2(value: &str) -> String {
    format!("-arg2={value}")
}
