//! Launchpad CLI
//!
//! Resolves extension selections against the built-in catalog and prints the
//! resulting multi-module build state.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Launchpad CLI", "launchpad".green().bold());
            println!();
            println!("Run {} for available commands.", "launchpad --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr so JSON on stdout stays clean.
///
/// `--verbose` forces DEBUG; otherwise `RUST_LOG` is honoured, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { request, json } => commands::run_resolve(&request, json),
        Commands::List { json } => commands::run_list(json),
        Commands::Check => commands::run_check(),
        Commands::Root { request } => commands::run_root(&request),
    }
}
