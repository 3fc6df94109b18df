//! Game phases and outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Which stimulus the engine is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a human tap.
    HumanTurn,
    /// Waiting for the bot timer to fire.
    BotTurn,
    /// Game over; only reset (or undo) leaves this phase.
    Terminal(Outcome),
}

impl Phase {
    /// Phase for an ongoing game with `to_move` on turn.
    pub fn for_turn(to_move: Player) -> Self {
        match to_move {
            Player::X => Phase::HumanTurn,
            Player::O => Phase::BotTurn,
        }
    }

    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}
