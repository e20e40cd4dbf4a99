//! Command-line interface.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Apply board indices (0-8) to a fresh game and print the result
    Replay {
        /// Indices in play order, X first
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0", "4", "1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Replay {
                moves: vec![0, 4, 1]
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.command, Command::Play);
        assert_eq!(cli.config.unwrap().to_str(), Some("game.toml"));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
