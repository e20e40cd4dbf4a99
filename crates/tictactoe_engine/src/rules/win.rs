//! Win detection logic for tic-tac-toe.

use crate::outcome::WinningLine;
use crate::types::{Board, Mark};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    // Columns
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    // Diagonals
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

/// Returns the first line held entirely by one mark, with that mark.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.indices();
        let mark = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some((mark, *line))
    })
}
