//! Authoritative game state and the render-ready snapshot.

use super::rules::{Evaluation, WinningLine, evaluate};
use super::{Board, Outcome, Phase, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Board, turn and outcome. Mutated only by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
            winning_line: None,
        }
    }

    /// Assembles a state from its parts without validation.
    pub fn from_parts(
        board: Board,
        current_player: Player,
        outcome: Option<Outcome>,
        winning_line: Option<WinningLine>,
    ) -> Self {
        Self {
            board,
            current_player,
            outcome,
            winning_line,
        }
    }

    /// Ongoing state for a restored board; the player on turn follows parity.
    pub fn restored(board: Board) -> Self {
        Self::from_parts(board, Player::for_parity(board.filled()), None, None)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome, `None` while ongoing.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Derived phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(outcome) => Phase::Terminal(outcome),
            None => Phase::for_turn(self.current_player),
        }
    }

    /// Places `player`'s mark and records the evaluation.
    ///
    /// The turn passes to the opponent only if the game goes on.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> Evaluation {
        self.board.set(pos, Square::Occupied(player));
        let eval = evaluate(&self.board);
        self.outcome = eval.outcome;
        self.winning_line = eval.winning_line;
        if !eval.is_terminal() {
            self.current_player = player.opponent();
        }
        eval
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-data view of the engine for a renderer.
///
/// Coordinates are `(row, col)`, zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Rows of optional marks.
    pub board: [[Option<Player>; 3]; 3],
    /// Player on turn (last mover once terminal).
    pub current_player: Player,
    /// Outcome, if the game is over.
    pub outcome: Option<Outcome>,
    /// Winning triple, if any.
    pub winning_line: Option<[(usize, usize); 3]>,
    /// Suggested cell for the human.
    pub best_move_hint: Option<(usize, usize)>,
    /// Occupied squares.
    pub move_count: usize,
    /// Current phase.
    pub phase: Phase,
    /// Whether the undo affordance should be shown.
    pub can_undo: bool,
}
