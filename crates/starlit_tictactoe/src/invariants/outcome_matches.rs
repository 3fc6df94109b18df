//! Outcome invariant: the recorded outcome is what the board says.

use super::super::rules::evaluate;
use super::super::{GameEngine, GameState};
use super::Invariant;

/// Invariant: outcome and winning line equal `evaluate(board)`.
///
/// Covers the winning line too: when present it is one of the 8 triples
/// and every cell holds the winner's mark.
pub struct OutcomeMatchesBoardInvariant;

impl OutcomeMatchesBoardInvariant {
    /// Checks a bare state.
    pub fn state_holds(state: &GameState) -> bool {
        let eval = evaluate(state.board());
        eval.outcome == state.outcome() && eval.winning_line == state.winning_line()
    }
}

impl Invariant<GameEngine> for OutcomeMatchesBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        Self::state_holds(engine.state())
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Outcome, Player};

    #[test]
    fn test_fresh_state_holds() {
        assert!(OutcomeMatchesBoardInvariant::state_holds(&GameState::new()));
    }

    #[test]
    fn test_missed_win_violates() {
        let board = Board::from_rows([
            [Some(Player::X), Some(Player::X), Some(Player::X)],
            [Some(Player::O), Some(Player::O), None],
            [None, None, None],
        ]);
        let state = GameState::from_parts(board, Player::O, None, None);
        assert!(!OutcomeMatchesBoardInvariant::state_holds(&state));
    }

    #[test]
    fn test_phantom_winner_violates() {
        let state =
            GameState::from_parts(Board::new(), Player::X, Some(Outcome::Winner(Player::O)), None);
        assert!(!OutcomeMatchesBoardInvariant::state_holds(&state));
    }
}
