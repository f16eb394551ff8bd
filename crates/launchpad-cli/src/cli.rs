//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Launchpad - Resolve extension selections into multi-module build state
#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a generation request and print the project state
    ///
    /// Examples:
    ///   launchpad resolve launchpad.toml          # Human-readable summary
    ///   launchpad resolve launchpad.toml --json   # Machine-readable state
    Resolve {
        /// Path to the generation request TOML file
        request: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every extension in the built-in catalog
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run the catalog self-check
    Check,

    /// Print the root build script for a generation request
    Root {
        /// Path to the generation request TOML file
        request: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from(["launchpad", "resolve", "req.toml", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                request: PathBuf::from("req.toml"),
                json: true,
            })
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["launchpad", "check", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Check));
    }

    #[test]
    fn test_root_requires_path() {
        assert!(Cli::try_parse_from(["launchpad", "root"]).is_err());
    }
}
