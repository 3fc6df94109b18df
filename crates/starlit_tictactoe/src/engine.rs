//! Human-vs-bot game engine.
//!
//! The engine owns the board, turn, outcome and undo history, and is driven
//! by three stimuli: a human tap, a bot timer firing, and explicit
//! undo/reset commands. Every illegal stimulus is a silent no-op.
//!
//! # Bot timing
//!
//! The engine never sleeps. Entering the bot's turn makes
//! [`GameEngine::pending_bot_turn`] return a [`BotTicket`]; the caller waits
//! however long it likes and hands the ticket to
//! [`GameEngine::play_bot_turn`]. Tickets are stamped with a generation
//! counter that every accepted move, undo and reset advances, so a timer
//! that outlives the board it was scheduled for cannot write to it.

use super::action::{Move, MoveError};
use super::advisor::{BotPolicy, best_move};
use super::contracts::LegalMove;
use super::events::{EventBus, EventSink, GameEvent};
use super::history::History;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rng::GameRng;
use super::rules::WinningLine;
use super::state::{GameSnapshot, GameState};
use super::{Board, Outcome, Phase, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Permission for one bot move, valid only for the generation it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotTicket {
    generation: u64,
}

impl BotTicket {
    /// Engine generation the ticket was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Engine construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// How the bot picks its moves.
    pub bot_policy: BotPolicy,
    /// Suppresses the human hint when true.
    pub hints_disabled: bool,
}

/// Tic-tac-toe engine for one human (X) against one bot (O).
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    history: History,
    hint: Option<Position>,
    generation: u64,
    rng: GameRng,
    options: EngineOptions,
    events: EventBus,
}

impl GameEngine {
    /// Creates an engine with a fresh game.
    #[instrument]
    pub fn new(options: EngineOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), policy = %options.bot_policy, "Creating game engine");
        let mut engine = Self {
            state: GameState::new(),
            history: History::new(),
            hint: None,
            generation: 0,
            rng,
            options,
            events: EventBus::default(),
        };
        engine.refresh_hint();
        engine
    }

    /// Creates an engine with default options and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineOptions {
            seed: Some(seed),
            ..EngineOptions::default()
        })
    }

    /// Registers a notification sink.
    pub fn subscribe(&mut self, sink: impl EventSink + Send + 'static) {
        self.events.subscribe(sink);
    }

    // ─────────────────────────────────────────────────────────────
    //  Observable state
    // ─────────────────────────────────────────────────────────────

    /// Returns the authoritative state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player on turn.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the outcome, `None` while ongoing.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line()
    }

    /// Suggested move for the human; `None` unless it is the human's turn.
    pub fn best_move_hint(&self) -> Option<Position> {
        self.hint
    }

    /// Number of occupied squares.
    pub fn move_count(&self) -> usize {
        self.state.board().filled()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the undo log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of undo snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Counter advanced by every accepted move, undo and reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether [`Self::undo_last_pair`] would do anything.
    pub fn can_undo(&self) -> bool {
        self.history.len() >= 2
    }

    /// Options the engine was built with.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Render-ready copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board().rows(),
            current_player: self.current_player(),
            outcome: self.outcome(),
            winning_line: self.winning_line().map(|line| line.coords()),
            best_move_hint: self.hint.map(Position::coords),
            move_count: self.move_count(),
            phase: self.phase(),
            can_undo: self.can_undo(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Stimuli
    // ─────────────────────────────────────────────────────────────

    /// Ticket for the bot move owed right now, if any.
    pub fn pending_bot_turn(&self) -> Option<BotTicket> {
        (self.phase() == Phase::BotTurn).then_some(BotTicket {
            generation: self.generation,
        })
    }

    /// Attempts a human move. Illegal moves change nothing.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn submit_human_move(&mut self, pos: Position) {
        if let Err(e) = self.try_move(Move::new(Player::X, pos)) {
            debug!(error = %e, "Human move ignored");
        }
    }

    /// Attempts a human move at zero-based `(row, col)`.
    pub fn submit_human_move_at(&mut self, row: usize, col: usize) {
        match Position::from_row_col(row, col) {
            Some(pos) => self.submit_human_move(pos),
            None => debug!(error = %MoveError::OffBoard(row, col), "Human move ignored"),
        }
    }

    /// Plays the bot's move if `ticket` is still current.
    #[instrument(skip_all, fields(generation = self.generation, ticket = ticket.generation))]
    pub fn play_bot_turn(&mut self, ticket: BotTicket) {
        if let Err(e) = self.try_bot_move(ticket) {
            debug!(error = %e, "Bot move ignored");
        }
    }

    /// Rewinds the last human+bot pair. No-op with fewer than two snapshots.
    ///
    /// Also revives a finished game: the restored board precedes the move
    /// that ended it.
    #[instrument(skip(self), fields(history = self.history.len()))]
    pub fn undo_last_pair(&mut self) {
        let Some(restored) = self.history.pop_pair() else {
            debug!("Nothing to undo");
            return;
        };
        self.state = GameState::restored(restored);
        self.generation += 1;
        self.refresh_hint();
        info!(moves = self.move_count(), to_move = %self.current_player(), "Undid last pair");
        self.check_invariants();
    }

    /// Starts a fresh game. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        self.history.clear();
        self.generation += 1;
        self.refresh_hint();
        info!(generation = self.generation, "Game reset");
        self.events.emit(GameEvent::GameReset);
        self.check_invariants();
    }

    // ─────────────────────────────────────────────────────────────
    //  Accepted-move path
    // ─────────────────────────────────────────────────────────────

    fn try_bot_move(&mut self, ticket: BotTicket) -> Result<Position, MoveError> {
        if ticket.generation != self.generation {
            return Err(MoveError::StaleTicket(ticket.generation));
        }
        if self.phase() != Phase::BotTurn {
            return Err(MoveError::WrongPlayer(Player::O));
        }
        let pos = self
            .options
            .bot_policy
            .choose(self.state.board(), Player::O, &mut self.rng)
            .ok_or(MoveError::GameOver)?;
        self.try_move(Move::new(Player::O, pos))?;
        Ok(pos)
    }

    /// Validates and applies a move, then notifies sinks.
    fn try_move(&mut self, mov: Move) -> Result<(), MoveError> {
        LegalMove::check(&mov, &self.state)?;

        self.history.push(*self.state.board());
        let eval = self.state.place(mov.position, mov.player);
        self.generation += 1;
        self.refresh_hint();

        debug!(mov = %mov, moves = self.move_count(), "Move accepted");
        self.events.emit(GameEvent::MovePlayed {
            player: mov.player,
            position: mov.position,
        });

        if let Some(outcome) = eval.outcome {
            info!(%outcome, "Game over");
            self.events.emit(match outcome {
                Outcome::Winner(Player::X) => GameEvent::HumanVictory,
                Outcome::Winner(Player::O) => GameEvent::BotVictory,
                Outcome::Draw => GameEvent::Draw,
            });
        }

        self.check_invariants();
        Ok(())
    }

    fn refresh_hint(&mut self) {
        self.hint = if self.phase() == Phase::HumanTurn && !self.options.hints_disabled {
            best_move(self.state.board(), Player::X, &mut self.rng)
        } else {
            None
        };
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(engine: &mut GameEngine) -> Arc<Mutex<Vec<GameEvent>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        engine.subscribe(move |event: &GameEvent| {
            sink.lock().expect("event log").push(*event);
        });
        log
    }

    fn bot_reply(engine: &mut GameEngine) {
        let ticket = engine.pending_bot_turn().expect("bot to move");
        engine.play_bot_turn(ticket);
    }

    #[test]
    fn test_fresh_engine() {
        let engine = GameEngine::with_seed(3);
        assert_eq!(engine.phase(), Phase::HumanTurn);
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.best_move_hint(), Some(Position::Center));
        assert_eq!(engine.pending_bot_turn(), None);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_human_move_hands_turn_to_bot() {
        let mut engine = GameEngine::with_seed(3);
        engine.submit_human_move(Position::Center);

        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.phase(), Phase::BotTurn);
        assert_eq!(engine.best_move_hint(), None);
        assert_eq!(engine.history_len(), 1);
        assert!(engine.pending_bot_turn().is_some());
    }

    #[test]
    fn test_tap_during_bot_turn_ignored() {
        let mut engine = GameEngine::with_seed(3);
        let log = recorder(&mut engine);
        engine.submit_human_move(Position::Center);
        let before = *engine.state();

        engine.submit_human_move(Position::TopLeft);

        assert_eq!(*engine.state(), before);
        assert_eq!(engine.history_len(), 1);
        assert_eq!(log.lock().expect("log").len(), 1);
    }

    #[test]
    fn test_bot_ticket_is_single_use() {
        let mut engine = GameEngine::with_seed(3);
        engine.submit_human_move(Position::Center);
        let ticket = engine.pending_bot_turn().expect("bot to move");

        engine.play_bot_turn(ticket);
        assert_eq!(engine.move_count(), 2);

        engine.play_bot_turn(ticket);
        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_stale_ticket_after_undo() {
        let mut engine = GameEngine::with_seed(3);
        engine.submit_human_move(Position::Center);
        bot_reply(&mut engine);
        engine.submit_human_move(engine.board().empty_positions()[0]);
        let stale = engine.pending_bot_turn().expect("bot to move");

        // Undo from the bot's turn rewinds the bot's reply and the human's
        // second move, so the bot is on turn again under a new generation.
        engine.undo_last_pair();
        assert_eq!(engine.move_count(), 1);
        let fresh = engine.pending_bot_turn().expect("bot to move");
        assert_ne!(stale, fresh);

        engine.play_bot_turn(stale);
        assert_eq!(engine.move_count(), 1);

        engine.play_bot_turn(fresh);
        assert_eq!(engine.move_count(), 2);
    }

    #[test]
    fn test_human_win_emits_victory_once() {
        let mut engine = GameEngine::with_seed(11);
        let log = recorder(&mut engine);

        // Human follows the hint, bot replies, until the game ends.
        while engine.outcome().is_none() {
            match engine.phase() {
                Phase::HumanTurn => {
                    let hint = engine.best_move_hint().expect("hint");
                    engine.submit_human_move(hint);
                }
                Phase::BotTurn => bot_reply(&mut engine),
                Phase::Terminal(_) => unreachable!(),
            }
        }

        let events = log.lock().expect("log").clone();
        let outcome_events: Vec<_> = events
            .iter()
            .filter(|e| !matches!(e, GameEvent::MovePlayed { .. }))
            .collect();
        assert_eq!(outcome_events.len(), 1);
        assert_eq!(engine.outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(*outcome_events[0], GameEvent::HumanVictory);
        assert_eq!(events.last(), Some(&GameEvent::HumanVictory));

        // Taps after the end change nothing and emit nothing.
        for pos in Position::ALL {
            engine.submit_human_move(pos);
        }
        assert_eq!(log.lock().expect("log").len(), events.len());
    }

    #[test]
    fn test_undo_revives_finished_game() {
        let mut engine = GameEngine::with_seed(5);
        while engine.outcome().is_none() {
            match engine.phase() {
                Phase::HumanTurn => {
                    let pos = engine.board().empty_positions()[0];
                    engine.submit_human_move(pos);
                }
                _ => bot_reply(&mut engine),
            }
        }
        let moves = engine.move_count();

        engine.undo_last_pair();

        assert_eq!(engine.outcome(), None);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.move_count(), moves - 2);
        assert_eq!(engine.current_player(), Player::for_parity(moves - 2));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = GameEngine::with_seed(3);
        let log = recorder(&mut engine);
        engine.submit_human_move(Position::Center);
        bot_reply(&mut engine);

        engine.reset_game();

        assert_eq!(*engine.state(), GameState::new());
        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.best_move_hint(), Some(Position::Center));
        assert_eq!(log.lock().expect("log").last(), Some(&GameEvent::GameReset));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let engine = GameEngine::new(EngineOptions {
            seed: Some(1),
            hints_disabled: true,
            ..EngineOptions::default()
        });
        assert_eq!(engine.best_move_hint(), None);
    }

    #[test]
    fn test_off_board_coordinates_ignored() {
        let mut engine = GameEngine::with_seed(3);
        engine.submit_human_move_at(3, 1);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.generation(), 0);
    }
}
