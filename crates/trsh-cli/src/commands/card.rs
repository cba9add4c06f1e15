// crates/trsh-cli/src/commands/card.rs - Item commands
//
// trcc, trdc, trmc and truc. Names go to the script exactly as typed; the
// script decides what matches an existing card.

use anyhow::Result;
use tracing::debug;
use trsh_core::Action;

use crate::context::Context;

/// Create an item, in In progress unless the code says otherwise
pub fn create(ctx: &Context, name: &str, code: Option<&str>) -> Result<()> {
    let action = Action::create_card(name, code);
    debug!(list = ?action.list(), "create target list");
    ctx.script_service.run(&action)
}

/// Delete an item by name
pub fn delete(ctx: &Context, name: &str) -> Result<()> {
    ctx.script_service.run(&Action::delete_card(name))
}

/// Move an item to another list, Done unless the code says otherwise
pub fn move_to(ctx: &Context, name: &str, code: Option<&str>) -> Result<()> {
    let action = Action::move_card(name, code);
    debug!(list = ?action.list(), "move target list");
    ctx.script_service.run(&action)
}

/// Give an item a new name
pub fn rename(ctx: &Context, name: &str, new_name: &str) -> Result<()> {
    ctx.script_service.run(&Action::update_card(name, new_name))
}
