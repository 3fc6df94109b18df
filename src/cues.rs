//! Sound and haptic cues, rendered as text in the terminal.

use starlit_tictactoe::{GameEvent, Player};
use tracing::info;

/// Text stand-in for the sound/haptic played on `event`.
pub fn cue_for(event: &GameEvent) -> String {
    match event {
        GameEvent::MovePlayed {
            player: Player::X,
            position,
        } => format!("*tap* You played {}.", position),
        GameEvent::MovePlayed {
            player: Player::O,
            position,
        } => format!("*thud* The bot played {}.", position),
        GameEvent::HumanVictory => "*fanfare* Victory!".to_string(),
        GameEvent::BotVictory => "*womp womp* Defeat.".to_string(),
        GameEvent::Draw => "*shrug* It's a draw.".to_string(),
        GameEvent::GameReset => "*chime* New game.".to_string(),
    }
}

/// Logs and returns the cue lines for a batch of events.
pub fn play_all(events: impl IntoIterator<Item = GameEvent>) -> Vec<String> {
    events
        .into_iter()
        .map(|event| {
            info!(?event, "Cue");
            cue_for(&event)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlit_tictactoe::Position;

    #[test]
    fn test_move_cues_name_the_cell() {
        let cue = cue_for(&GameEvent::MovePlayed {
            player: Player::O,
            position: Position::Center,
        });
        assert_eq!(cue, "*thud* The bot played Center.");
    }

    #[test]
    fn test_play_all_keeps_order() {
        let cues = play_all([GameEvent::GameReset, GameEvent::HumanVictory]);
        assert_eq!(cues, vec!["*chime* New game.", "*fanfare* Victory!"]);
    }
}
