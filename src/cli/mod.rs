// src/cli/mod.rs
//! CLI definitions for edid-fix
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Running without a subcommand performs the demo repair on the built-in
//! sample block.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use edid_fix::{DEFAULT_FIXTURE, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "edid-fix")]
#[command(author = "edid-fix Contributors")]
#[command(version)]
#[command(about = "Repair the version, product-name tag and checksum of a 128-byte EDID block", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the built-in sample EDID and repair it
    Demo {
        /// Where to write the unmodified sample block
        #[arg(long, default_value = DEFAULT_FIXTURE)]
        fixture: String,

        /// Where to write the repaired block
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,
    },

    /// Repair a 128-byte EDID file
    Fix {
        /// Path to the raw EDID block
        input: String,

        /// Where to write the repaired block (overwritten if present)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,
    },

    /// Show version, text descriptor tags and checksum status of an EDID file
    ///
    /// Exits with an error when the checksum does not validate.
    Check {
        /// Path to the raw EDID block
        input: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["edid-fix"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_fix_default_output() {
        let cli = Cli::try_parse_from(["edid-fix", "fix", "panel.bin"]).unwrap();
        match cli.command {
            Some(Commands::Fix { input, output }) => {
                assert_eq!(input, "panel.bin");
                assert_eq!(output, "edid.bin");
            }
            _ => panic!("expected fix command"),
        }
    }

    #[test]
    fn test_demo_overrides() {
        let cli = Cli::try_parse_from([
            "edid-fix", "demo", "--fixture", "in.bin", "-o", "out.bin",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Demo { fixture, output }) => {
                assert_eq!(fixture, "in.bin");
                assert_eq!(output, "out.bin");
            }
            _ => panic!("expected demo command"),
        }
    }
}
