//! First-class move types for tic-tac-toe.
//!
//! A rejected move is not a failure the caller sees: the engine turns every
//! [`MoveError`] into a logged no-op. The type exists so the reason can be
//! named and tested.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// Row or column outside 0..=2.
    #[display("Cell ({}, {}) is off the board", _0, _1)]
    OffBoard(usize, usize),

    /// The bot ticket was issued for an earlier game state.
    #[display("Bot ticket from generation {} is stale", _0)]
    StaleTicket(u64),
}

impl std::error::Error for MoveError {}
