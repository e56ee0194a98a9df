//! noughts - play noughts and crosses against a computer that never loses
//!
//! Running without a subcommand starts an interactive game. Set `RUST_LOG`
//! (e.g. `RUST_LOG=noughts=debug`) to see search statistics on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Noughts and crosses against an unbeatable computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive games in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Evaluate a board position with the full minimax search
    Solve(noughts::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => noughts::cli::commands::play::execute(args),
        Some(Commands::Solve(args)) => noughts::cli::commands::solve::execute(args),
        None => noughts::cli::commands::play::execute(Default::default()),
    }
}
