// crates/trsh-cli/src/commands/board.rs - Board-wide and list commands
//
// trb, trmon and trlst. Each is a single forwarded request; the script prints
// the board, report or list itself.

use anyhow::Result;
use trsh_core::Action;

use crate::context::Context;

/// Show every list on the board
pub fn show_board(ctx: &Context) -> Result<()> {
    ctx.script_service.run(&Action::ShowBoard)
}

/// Weekly process: report, archive recently done items, clear Done
pub fn monday(ctx: &Context) -> Result<()> {
    ctx.script_service.run(&Action::Monday)
}

/// Show one list; `i`, `w`, `t` pick a list, anything else shows Done
pub fn show_list(ctx: &Context, code: Option<&str>) -> Result<()> {
    ctx.script_service.run(&Action::show_list(code))
}
