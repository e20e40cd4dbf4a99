//! The round engine: move application and round lifecycle.
//!
//! Illegal moves are absorbed as no-ops so a presentation layer can forward
//! every click without pre-validating. The returned [`MoveReport`] says what
//! happened; ignoring it is always safe.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::outcome::RoundOutcome;
use crate::position::Position;
use crate::rules;
use crate::session::GameSession;
use crate::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Error)]
pub enum MoveRejection {
    /// Index is not on the board.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The round has already been decided.
    #[display("Round is already over")]
    RoundOver,
}

/// Result of [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReport {
    /// The mark was placed and the session changed.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Round outcome after the move.
        outcome: RoundOutcome,
    },
    /// Nothing changed.
    Ignored(MoveRejection),
}

impl MoveReport {
    /// Returns true if the session changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveReport::Placed { .. })
    }

    /// Returns true if this move decided the round.
    pub fn ended_round(&self) -> bool {
        matches!(self, MoveReport::Placed { outcome, .. } if outcome.is_decided())
    }
}

/// Tic-tac-toe engine owning a single [`GameSession`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    session: GameSession,
}

impl GameEngine {
    /// Creates an engine with a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Resumes from an existing session.
    ///
    /// Sessions only come from an engine or from validated deserialization,
    /// so the invariants already hold.
    pub fn from_session(session: GameSession) -> Self {
        Self { session }
    }

    /// Builds a fresh engine and applies each index in order.
    ///
    /// Illegal indices are skipped exactly as [`apply_move`](Self::apply_move) skips them.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut engine = Self::new();
        for &index in indices {
            let _ = engine.apply_move(index);
        }
        engine
    }

    /// Returns the session for reading.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the engine, returning its session.
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Checks whether a move at `index` would be accepted.
    #[instrument(skip(self))]
    pub fn check_move(&self, index: usize) -> Result<Position, MoveRejection> {
        if self.session.outcome().is_decided() {
            return Err(MoveRejection::RoundOver);
        }

        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;

        if !self.session.board().is_empty(pos) {
            return Err(MoveRejection::CellOccupied(pos));
        }

        Ok(pos)
    }

    /// Places the current mark at `index`, or does nothing if the move is illegal.
    #[instrument(skip(self), fields(turn = %self.session.turn()))]
    pub fn apply_move(&mut self, index: usize) -> MoveReport {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return MoveReport::Ignored(rejection);
            }
        };

        let mark = self.session.place(pos);
        let outcome = rules::evaluate(self.session.board());

        if outcome.is_decided() {
            self.session.conclude(outcome);
            info!(%outcome, scores = %self.session.scores(), "Round over");
        } else {
            self.session.pass_turn();
            debug!(%mark, position = %pos, "Move placed");
        }

        debug_assert!(
            SessionInvariants::check_all(&self.session).is_ok(),
            "session invariants violated after move at {}",
            index
        );

        MoveReport::Placed {
            mark,
            position: pos,
            outcome,
        }
    }

    /// Clears board, turn and outcome. Scores are kept.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        self.session.next_round();
        debug!(round = self.session.round(), "New round");
    }

    /// Starts a new round and zeroes both scores.
    #[instrument(skip(self))]
    pub fn full_reset(&mut self) {
        self.session.clear_all();
        debug!("Full reset");
    }

    /// Returns empty positions while the round is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.session.outcome().is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(self.session.board())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_first_move_places_x() {
        let mut engine = GameEngine::new();
        let report = engine.apply_move(4);
        assert_eq!(
            report,
            MoveReport::Placed {
                mark: Mark::X,
                position: Position::Center,
                outcome: RoundOutcome::InProgress,
            }
        );
        assert_eq!(engine.session().board().cell(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(engine.session().turn(), Mark::O);
    }

    #[test]
    fn test_check_move_priorities() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(engine.check_move(99), Err(MoveRejection::RoundOver));

        engine.start_new_round();
        assert_eq!(engine.check_move(99), Err(MoveRejection::OutOfBounds(99)));
        let _ = engine.apply_move(0);
        assert_eq!(
            engine.check_move(0),
            Err(MoveRejection::CellOccupied(Position::TopLeft))
        );
        assert_eq!(engine.check_move(8), Ok(Position::BottomRight));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            MoveRejection::OutOfBounds(12).to_string(),
            "Index 12 is outside the board (0-8)"
        );
        assert_eq!(
            MoveRejection::CellOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]);
        assert!(engine.session().outcome().is_decided());
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_report_flags() {
        let mut engine = GameEngine::replay(&[0, 3, 1, 4]);
        let report = engine.apply_move(2);
        assert!(report.is_placed());
        assert!(report.ended_round());
        let report = engine.apply_move(5);
        assert!(!report.is_placed());
        assert!(!report.ended_round());
    }
}
