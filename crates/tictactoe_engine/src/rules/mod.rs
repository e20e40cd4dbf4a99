//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the engine composes them into
//! terminal-state detection after each accepted move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, find_winning_line};

use crate::outcome::RoundOutcome;
use crate::types::Board;
use tracing::instrument;

/// Classifies a board: first winning line, else draw when full, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((mark, line)) = find_winning_line(board) {
        RoundOutcome::Win { mark, line }
    } else if is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
