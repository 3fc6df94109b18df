//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. [`evaluate`] is the single source of
//! truth for terminality; the engine never tracks a winner any other way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner, wins};

use super::{Board, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// `None` while the game is ongoing.
    pub outcome: Option<Outcome>,
    /// Present only for a win.
    pub winning_line: Option<WinningLine>,
}

impl Evaluation {
    /// Evaluation of an ongoing game.
    pub const ONGOING: Evaluation = Evaluation {
        outcome: None,
        winning_line: None,
    };

    /// Returns true if the evaluated board is terminal.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Classifies a board as won, drawn or ongoing.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation {
            outcome: Some(Outcome::Winner(player)),
            winning_line: Some(line),
        };
    }

    if is_full(board) {
        return Evaluation {
            outcome: Some(Outcome::Draw),
            winning_line: None,
        };
    }

    Evaluation::ONGOING
}
