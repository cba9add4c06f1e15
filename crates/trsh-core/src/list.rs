// crates/trsh-core/src/list.rs - Board lists and single-letter list codes

use std::fmt;

/// One of the four columns on the board
///
/// The display form is the canonical name the board script expects, so
/// `ListName::WaitingForCustomer.to_string()` is `"Waiting for customer"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    InProgress,
    WaitingForCustomer,
    Testing,
    Done,
}

impl ListName {
    /// All lists in board order
    pub const ALL: [ListName; 4] = [
        ListName::InProgress,
        ListName::WaitingForCustomer,
        ListName::Testing,
        ListName::Done,
    ];

    /// Canonical list name as shown on the board
    pub fn as_str(self) -> &'static str {
        match self {
            ListName::InProgress => "In progress",
            ListName::WaitingForCustomer => "Waiting for customer",
            ListName::Testing => "Testing",
            ListName::Done => "Done",
        }
    }

    /// Single-letter code users type for this list
    pub fn code(self) -> char {
        match self {
            ListName::InProgress => 'i',
            ListName::WaitingForCustomer => 'w',
            ListName::Testing => 't',
            ListName::Done => 'd',
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the list code used by `show list` and `move item`
///
/// `i`, `w` and `t` select In progress, Waiting for customer and Testing.
/// Anything else, including no code at all, selects Done. Codes are matched
/// exactly, so `"I"` or `" i"` also fall through to Done.
pub fn resolve_target(code: Option<&str>) -> ListName {
    match code {
        Some("i") => ListName::InProgress,
        Some("w") => ListName::WaitingForCustomer,
        Some("t") => ListName::Testing,
        _ => ListName::Done,
    }
}

/// Resolve the list code used by `create item`
///
/// `w`, `t` and `d` select Waiting for customer, Testing and Done. Anything
/// else, including no code at all, selects In progress.
pub fn resolve_create(code: Option<&str>) -> ListName {
    match code {
        Some("w") => ListName::WaitingForCustomer,
        Some("t") => ListName::Testing,
        Some("d") => ListName::Done,
        _ => ListName::InProgress,
    }
}
