//! The game session aggregate.

use crate::invariants::{InvariantViolation, check_session};
use crate::outcome::RoundOutcome;
use crate::position::Position;
use crate::score::ScoreBoard;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer reads: board, turn, outcome and scores.
///
/// Board, turn and outcome are replaced wholesale at each new round. Scores
/// accumulate across rounds.
///
/// Deserializing checks the session invariants, so a restored snapshot is
/// always one the engine could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    turn: Mark,
    outcome: RoundOutcome,
    scores: ScoreBoard,
    round: u32,
}

impl GameSession {
    /// Creates a session at round 1 with an empty board and zero scores.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: RoundOutcome::InProgress,
            scores: ScoreBoard::new(),
            round: 1,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome of the current round.
    pub fn outcome(&self) -> &RoundOutcome {
        &self.outcome
    }

    /// Returns the running scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns the 1-based number of the current round.
    ///
    /// Only rounds that saw at least one move advance the counter.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Places the current mark (unchecked, use `GameEngine::apply_move`).
    pub(crate) fn place(&mut self, pos: Position) -> Mark {
        let mark = self.turn;
        self.board.set(pos, Cell::Occupied(mark));
        mark
    }

    pub(crate) fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Records a decided outcome, crediting the winner.
    pub(crate) fn conclude(&mut self, outcome: RoundOutcome) {
        if let Some(mark) = outcome.winner() {
            self.scores.increment(mark);
        }
        self.outcome = outcome;
    }

    pub(crate) fn clear_round(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.outcome = RoundOutcome::InProgress;
    }

    /// An untouched board stays the same round, so repeated calls are idempotent.
    pub(crate) fn next_round(&mut self) {
        if self.board.empty_count() < Board::SIZE {
            self.round = self.round.saturating_add(1);
        }
        self.clear_round();
    }

    pub(crate) fn clear_all(&mut self) {
        self.clear_round();
        self.scores.clear();
        self.round = 1;
    }
}

/// Unchecked wire form of a [`GameSession`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    turn: Mark,
    outcome: RoundOutcome,
    scores: ScoreBoard,
    round: u32,
}

/// A snapshot that no sequence of engine operations could produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct InvalidSession {
    /// Every violated invariant.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Invalid session: {}", descriptions)
    }
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            board: record.board,
            turn: record.turn,
            outcome: record.outcome,
            scores: record.scores,
            round: record.round,
        };

        let mut violations = check_session(&session).err().unwrap_or_default();
        if session.round == 0 {
            violations.push(InvariantViolation::new("Round numbers start at 1"));
        }

        if violations.is_empty() {
            Ok(session)
        } else {
            Err(InvalidSession { violations })
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
