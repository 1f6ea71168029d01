//! Storeterms command-line shell
//!
//! This is the thin shell that collects merchant input and hands rendered
//! documents to delivery. Core logic lives in the `crates/` directory.

pub mod cli;
pub mod commands;
pub mod error;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};
use std::process::ExitCode;
use tracing::debug;

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = match verbose {
        0 => "warn,storeterms=info",
        1 => "info,storeterms=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Parse arguments, run the selected command and map the outcome to an exit code.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("Starting storeterms v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args, cli.config.as_deref()),
        Commands::Templates { json } => commands::templates::run(json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init { force } => commands::config::init(force),
            ConfigCommands::Show => commands::config::show(cli.config.as_deref()),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
