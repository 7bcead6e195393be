// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use edid_fix::{DEFAULT_FIXTURE, DEFAULT_OUTPUT};
use std::io;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { fixture, output }) => commands::cmd_demo(&fixture, &output),
        Some(Commands::Fix { input, output }) => commands::cmd_fix(&input, &output),
        Some(Commands::Check { input }) => commands::cmd_check(&input),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "edid-fix", &mut io::stdout());
            Ok(())
        }
        // No command: repair the sample block under the default names
        None => commands::cmd_demo(DEFAULT_FIXTURE, DEFAULT_OUTPUT),
    }
}
