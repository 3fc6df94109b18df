//! Move advisor: the hint shown to the human, and the bot's move policies.
//!
//! The advisor is a fixed priority list, not a search:
//! win, block, center, random corner, random empty square.

use super::rng::GameRng;
use super::rules::wins;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// How the bot picks its move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotPolicy {
    /// Uniformly random empty square.
    #[default]
    Random,
    /// Same priority list as the human's hint.
    Heuristic,
}

/// First empty square (row-major) where `player` completes a triple.
fn completing_move(board: &Board, empty: &[Position], player: Player) -> Option<Position> {
    empty.iter().copied().find(|pos| {
        let mut trial = *board;
        trial.set(*pos, Square::Occupied(player));
        wins(&trial, player)
    })
}

/// Suggests a move for `mover`, or `None` when the board is full.
#[instrument(skip_all, fields(mover = %mover))]
pub fn best_move(board: &Board, mover: Player, rng: &mut GameRng) -> Option<Position> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    if let Some(pos) = completing_move(board, &empty, mover) {
        trace!(position = %pos, "Winning move available");
        return Some(pos);
    }

    if let Some(pos) = completing_move(board, &empty, mover.opponent()) {
        trace!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = rng.choose(&corners) {
        return Some(*pos);
    }

    rng.choose(&empty).copied()
}

/// Uniformly random empty square.
pub fn random_move(board: &Board, rng: &mut GameRng) -> Option<Position> {
    rng.choose(&board.empty_positions()).copied()
}

impl BotPolicy {
    /// Picks the bot's move under this policy.
    #[instrument(skip(board, rng))]
    pub fn choose(self, board: &Board, bot: Player, rng: &mut GameRng) -> Option<Position> {
        match self {
            BotPolicy::Random => random_move(board, rng),
            BotPolicy::Heuristic => best_move(board, bot, rng),
        }
    }
}
