//! Tic-tac-toe round engine.
//!
//! Owns the board, the turn, the round outcome and the running score across
//! rounds. A presentation layer forwards cell indices to
//! [`GameEngine::apply_move`] and re-reads the [`GameSession`] afterwards.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, RoundOutcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     let _ = engine.apply_move(index);
//! }
//! assert_eq!(engine.session().outcome().winner(), Some(Mark::X));
//! assert_eq!(engine.session().scores().get(Mark::X), 1);
//!
//! engine.start_new_round();
//! assert_eq!(engine.session().outcome(), &RoundOutcome::InProgress);
//! assert_eq!(engine.session().scores().get(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use engine::{GameEngine, MoveRejection, MoveReport};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant, SessionInvariants, TurnParityInvariant, check_session,
};
pub use outcome::{InvalidLine, RoundOutcome, WinningLine};
pub use position::Position;
pub use score::ScoreBoard;
pub use session::{GameSession, InvalidSession};
pub use types::{Board, Cell, Mark};
