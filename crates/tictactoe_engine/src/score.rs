//! Running win counts across rounds.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Number of rounds each mark has won.
///
/// Survives new rounds; only a full reset clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for a mark.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Records a decisive win.
    pub(crate) fn increment(&mut self, mark: Mark) {
        let slot = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
    }

    /// Zeroes both counts.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the mark with more wins, `None` when tied.
    pub fn leader(&self) -> Option<Mark> {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => Some(Mark::X),
            std::cmp::Ordering::Less => Some(Mark::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}
