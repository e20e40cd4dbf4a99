//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::rules;
use crate::session::GameSession;

/// Invariant: the recorded outcome equals a fresh evaluation of the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameSession> for OutcomeConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        *session.outcome() == rules::evaluate(session.board())
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
