//! Pure game engine for a casual human-vs-bot tic-tac-toe.
//!
//! The engine holds the board, turn and undo history, decides wins and
//! draws, suggests moves for the human and picks moves for the bot. It does
//! no I/O and never sleeps: rendering, sound and the bot's thinking delay
//! belong to the caller, which talks to the engine through
//! [`GameEngine`] methods, [`GameSnapshot`]s and [`GameEvent`] sinks.
//!
//! ```
//! use starlit_tictactoe::{GameEngine, Phase, Position};
//!
//! let mut engine = GameEngine::with_seed(7);
//! engine.submit_human_move(Position::Center);
//! assert_eq!(engine.phase(), Phase::BotTurn);
//!
//! let ticket = engine.pending_bot_turn().expect("bot owes a move");
//! engine.play_bot_turn(ticket);
//! assert_eq!(engine.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod advisor;
mod contracts;
mod engine;
mod events;
mod history;
pub mod invariants;
mod phases;
mod position;
mod rng;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use advisor::{BotPolicy, best_move, random_move};
pub use contracts::{GameNotOver, LegalMove, PlayersTurn, SquareIsEmpty};
pub use engine::{BotTicket, EngineOptions, GameEngine};
pub use events::{EventBus, EventSink, GameEvent};
pub use history::History;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use rng::GameRng;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use state::{GameSnapshot, GameState};
pub use types::{Board, Player, Square};

