// crates/trsh-cli/src/main.rs - CLI Application Entry Point
//
// trsh maps short commands to one invocation of an external board script:
//
//   trsh list w                  # board-script show_list -arg1="Waiting for customer"
//   trsh create "ABC-12 3" t     # board-script create_card -arg1="ABC-12 3" -arg2=Testing
//   eval "$(trsh init bash)"     # then: trlst w, trcc "ABC-12 3" t, ...
//
// Board commands always exit 0 once the request has been handed to the
// script; the script reports its own failures. Only problems found before
// delegating (no script configured, bad config file) exit non-zero.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Effective configuration and services
mod services; // Board script invocation

use cli::{Cli, Commands};
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // These don't need a Context: shortcuts and lists are static, and config
    // commands cope with a missing or broken config file themselves
    match &cli.command {
        Commands::Shortcuts { name, json } => {
            return commands::shortcuts::handle(name.as_deref(), *json);
        }
        Commands::Lists => return commands::shortcuts::lists(),
        Commands::Config(cmd) => return commands::config::handle(&cli, cmd),
        #[cfg(feature = "completions")]
        Commands::Completions { shell } => return commands::completions::handle(*shell),
        _ => {}
    }

    let ctx = Context::new(&cli)?;

    match &cli.command {
        Commands::Board => commands::board::show_board(&ctx),
        Commands::Monday => commands::board::monday(&ctx),
        Commands::List { code } => commands::board::show_list(&ctx, code.as_deref()),
        Commands::Create { name, code } => commands::card::create(&ctx, name, code.as_deref()),
        Commands::Delete { name } => commands::card::delete(&ctx, name),
        Commands::Move { name, code } => commands::card::move_to(&ctx, name, code.as_deref()),
        Commands::Rename { name, new_name } => commands::card::rename(&ctx, name, new_name),
        Commands::Init { shell, program } => {
            commands::init::handle(&ctx, shell, program.as_deref())
        }
        Commands::Shortcuts { .. } | Commands::Lists | Commands::Config(_) => {
            unreachable!() // Already handled above
        }
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(), // Already handled above
    }
}

/// Log to stderr; RUST_LOG wins, otherwise warnings plus whatever -v asks for
fn init_tracing(verbose: u8) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            for target in ["trsh", "trsh_core"] {
                if let Ok(directive) = format!("{target}={level}").parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
