//! Mark balance invariant: X leads O by zero or one.

use super::super::{Board, GameEngine, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always opens and marks strictly alternate.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance of a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::board_holds(engine.board())
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards() {
        assert!(MarkBalanceInvariant::board_holds(&Board::new()));
        let board = Board::from_rows([
            [Some(Player::X), None, None],
            [None, None, None],
            [None, None, None],
        ]);
        assert!(MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board = Board::from_rows([
            [Some(Player::O), None, None],
            [None, None, None],
            [None, None, None],
        ]);
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board = Board::from_rows([
            [Some(Player::X), Some(Player::X), None],
            [None, None, None],
            [None, None, None],
        ]);
        assert!(!MarkBalanceInvariant::board_holds(&board));
    }
}
