//! Reversi CLI - Console front-end for the board engine
//!
//! Commands:
//! - play: Interactive pass-and-play on the terminal
//! - replay: Apply a scripted move list and print the final position
//! - simulate: Play random games to exercise the engine

mod display;
mod play;
mod replay;
mod setup;
mod simulate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Two-player disc-capturing board game")]
struct Cli {
    /// Random seed (used by simulate)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, entering moves as x,y
    Play(play::PlayArgs),
    /// Apply a list of moves and show the result
    Replay(replay::ReplayArgs),
    /// Play random legal moves and report outcomes
    Simulate(simulate::SimulateArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Replay(args) => replay::run(args),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
    }
}

/// Log to stderr so board output on stdout stays clean
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
