//! Round outcome types.

use crate::position::Position;
use crate::rules::LINES;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// The ordered triple of board indices that completed a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct WinningLine([usize; 3]);

/// A triple of indices that is not one of the eight winning lines.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a winning line", indices)]
pub struct InvalidLine {
    /// The rejected indices.
    pub indices: [usize; 3],
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = InvalidLine;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        LINES
            .iter()
            .copied()
            .find(|line| line.0 == indices)
            .ok_or(InvalidLine { indices })
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.0
    }
}

impl WinningLine {
    pub(crate) const fn new(indices: [usize; 3]) -> Self {
        Self(indices)
    }

    /// Board indices of the line, in pattern order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Positions of the line, in pattern order.
    pub fn positions(&self) -> [Position; 3] {
        self.0.map(|i| Position::ALL[i])
    }
}

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no line.
    Draw,
}

impl RoundOutcome {
    /// Returns true once the round has been decided.
    pub fn is_decided(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            RoundOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Win { mark, line } => {
                let [a, b, c] = line.indices();
                write!(f, "{} wins ({}, {}, {})", mark, a, b, c)
            }
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_accepts_known_lines_only() {
        assert_eq!(
            WinningLine::try_from([0, 4, 8]).map(|l| l.indices()),
            Ok([0, 4, 8])
        );
        assert_eq!(
            WinningLine::try_from([0, 1, 3]),
            Err(InvalidLine { indices: [0, 1, 3] })
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let line = LINES[3];
        let win = RoundOutcome::Win { mark: Mark::O, line };
        assert!(win.is_decided());
        assert_eq!(win.winner(), Some(Mark::O));
        assert_eq!(win.line(), Some(line));
        assert_eq!(
            line.positions(),
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );

        assert!(!RoundOutcome::InProgress.is_decided());
        assert!(RoundOutcome::Draw.is_decided());
        assert_eq!(RoundOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_display() {
        let win = RoundOutcome::Win {
            mark: Mark::X,
            line: LINES[0],
        };
        assert_eq!(win.to_string(), "X wins (0, 1, 2)");
        assert_eq!(RoundOutcome::Draw.to_string(), "Draw");
    }
}
