//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Mark;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X opens every round and marks are placed one at a time.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Mark counts stay balanced (X equals O or leads by one)"
    }
}
