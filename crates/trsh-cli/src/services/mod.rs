// crates/trsh-cli/src/services/mod.rs - Service layer modules
pub mod script;

pub use script::ScriptService;
