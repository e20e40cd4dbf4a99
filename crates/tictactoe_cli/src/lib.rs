//! Terminal front end for the tic-tac-toe round engine.
//!
//! Reads cell choices from the terminal, forwards them to
//! [`tictactoe_engine::GameEngine`] and renders the session after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod shell;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use shell::{Input, Shell, Step};
