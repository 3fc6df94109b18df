//! History consistency invariant: one snapshot per occupied square.

use super::super::{GameEngine, History};
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
///
/// Every accepted move pushed exactly one snapshot, so the i-th snapshot
/// holds exactly i marks. A bot move applied without its push breaks this.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks a history against the current number of occupied squares.
    pub fn pairs_with(history: &History, filled: usize) -> bool {
        history.len() == filled
            && history
                .snapshots()
                .iter()
                .enumerate()
                .all(|(i, snapshot)| snapshot.filled() == i)
    }
}

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::pairs_with(engine.history(), engine.move_count())
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Square};

    #[test]
    fn test_empty_history_with_empty_board() {
        assert!(HistoryConsistentInvariant::pairs_with(&History::new(), 0));
    }

    #[test]
    fn test_missing_snapshot_violates() {
        let mut history = History::new();
        history.push(Board::new());
        assert!(!HistoryConsistentInvariant::pairs_with(&history, 2));
    }

    #[test]
    fn test_out_of_order_snapshot_violates() {
        let mut marked = Board::new();
        marked.set(Position::Center, Square::Occupied(Player::X));

        let mut history = History::new();
        history.push(marked);
        history.push(Board::new());
        assert!(!HistoryConsistentInvariant::pairs_with(&history, 2));
    }
}
