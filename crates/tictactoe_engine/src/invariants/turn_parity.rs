//! Turn parity invariant: the next mark follows from the board.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Mark;

/// Invariant: while a round is in progress, X moves iff the counts are equal.
///
/// After a decisive move the turn is left on the winner, so decided
/// rounds are exempt.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.outcome().is_decided() {
            return true;
        }

        let board = session.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Turn alternates X, O, X, ... from the start of the round"
    }
}
