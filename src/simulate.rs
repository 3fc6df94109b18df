//! Headless games: the human side follows the hint, bot turns play at once.

use derive_getters::Getters;
use starlit_tictactoe::{EngineOptions, GameEngine, GameEvent, Outcome, Phase, Player, Position};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, instrument};

/// Tally of simulated games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SimulationReport {
    games: usize,
    human_wins: usize,
    bot_wins: usize,
    draws: usize,
    moves: usize,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} human wins, {} bot wins, {} draws ({} moves)",
            self.games, self.human_wins, self.bot_wins, self.draws, self.moves
        )
    }
}

/// Plays `games` games on one engine, resetting between them.
#[instrument(skip(options))]
pub fn run(games: usize, options: EngineOptions) -> SimulationReport {
    let mut engine = GameEngine::new(EngineOptions {
        hints_disabled: false,
        ..options
    });

    let moves = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&moves);
    engine.subscribe(move |event: &GameEvent| {
        if matches!(event, GameEvent::MovePlayed { .. }) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    });

    let mut report = SimulationReport::default();
    for game in 0..games {
        if game > 0 {
            engine.reset_game();
        }
        let outcome = play_out(&mut engine);
        debug!(game, %outcome, "Simulated game finished");

        report.games += 1;
        match outcome {
            Outcome::Winner(Player::X) => report.human_wins += 1,
            Outcome::Winner(Player::O) => report.bot_wins += 1,
            Outcome::Draw => report.draws += 1,
        }
    }
    report.moves = moves.load(Ordering::Relaxed);

    info!(%report, "Simulation complete");
    report
}

fn play_out(engine: &mut GameEngine) -> Outcome {
    loop {
        match engine.phase() {
            Phase::Terminal(outcome) => return outcome,
            Phase::HumanTurn => {
                let choice = engine
                    .best_move_hint()
                    .or_else(|| Position::valid_moves(engine.board()).first().copied());
                let Some(pos) = choice else {
                    return Outcome::Draw;
                };
                engine.submit_human_move(pos);
            }
            Phase::BotTurn => {
                if let Some(ticket) = engine.pending_bot_turn() {
                    engine.play_bot_turn(ticket);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallies_add_up() {
        let report = run(
            40,
            EngineOptions {
                seed: Some(21),
                ..EngineOptions::default()
            },
        );
        assert_eq!(*report.games(), 40);
        assert_eq!(report.human_wins() + report.bot_wins() + report.draws(), 40);
        assert!(*report.moves() >= 40 * 5);
    }

    #[test]
    fn test_hint_beats_random_bot() {
        let report = run(
            100,
            EngineOptions {
                seed: Some(4),
                ..EngineOptions::default()
            },
        );
        assert!(report.human_wins() > report.bot_wins());
    }

    #[test]
    fn test_same_seed_same_report() {
        let options = EngineOptions {
            seed: Some(99),
            ..EngineOptions::default()
        };
        assert_eq!(run(25, options), run(25, options));
    }
}
