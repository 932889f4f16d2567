//! Development tasks for the motion workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Lint, Replay, Routes};

/// Development tasks for the motion workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the motion engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a scenario and print character traces
    Replay(Replay),

    /// Check routes and scenarios for unknown command codes
    Lint(Lint),

    /// List the shared route library
    Routes(Routes),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MOTION_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay(cmd) => cmd.execute(),
        Command::Lint(cmd) => cmd.execute(),
        Command::Routes(cmd) => cmd.execute(),
    }
}
