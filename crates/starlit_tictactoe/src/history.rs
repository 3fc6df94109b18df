//! Undo log of pre-move board snapshots.

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board snapshots, one pushed immediately before each accepted move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the board as it was before a move.
    pub fn push(&mut self, before: Board) {
        self.snapshots.push(before);
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots in the order they were taken.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops the two most recent snapshots and returns the older one.
    ///
    /// That is the board before the second-to-last move. Returns `None` and
    /// leaves the log untouched when fewer than two snapshots exist.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn pop_pair(&mut self) -> Option<Board> {
        if self.snapshots.len() < 2 {
            return None;
        }
        let keep = self.snapshots.len() - 2;
        let restored = self.snapshots[keep];
        self.snapshots.truncate(keep);
        debug!(remaining = keep, "Rewound two snapshots");
        Some(restored)
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn board_with(positions: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in positions {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_pop_pair_needs_two_snapshots() {
        let mut history = History::new();
        assert_eq!(history.pop_pair(), None);

        history.push(Board::new());
        assert_eq!(history.pop_pair(), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_pair_returns_older_snapshot() {
        let first = Board::new();
        let second = board_with(&[(Position::Center, Player::X)]);
        let third = board_with(&[(Position::Center, Player::X), (Position::TopLeft, Player::O)]);

        let mut history = History::new();
        history.push(first);
        history.push(second);
        history.push(third);

        assert_eq!(history.pop_pair(), Some(second));
        assert_eq!(history.snapshots(), &[first]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(Board::new());
        history.push(Board::new());
        history.clear();
        assert!(history.is_empty());
    }
}
