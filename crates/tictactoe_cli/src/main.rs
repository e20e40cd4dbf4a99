//! Tic-tac-toe terminal front end.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Command, Config, Shell};
use tictactoe_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Config comes first because it supplies the default log filter.
    let config = Config::load(cli.config.as_deref())?;

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(?config, "Config loaded");

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves } => run_replay(config, &moves),
    }
}

/// Interactive game on stdin/stdout.
fn run_play(config: Config) -> Result<()> {
    info!("Starting interactive game");
    let mut shell = Shell::new(config);
    shell.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Plays the given indices and prints where they lead.
fn run_replay(config: Config, moves: &[usize]) -> Result<()> {
    info!(count = moves.len(), "Replaying moves");
    let shell = Shell::with_engine(GameEngine::replay(moves), config);
    println!("{}", shell.summary());
    Ok(())
}
