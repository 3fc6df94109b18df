//! Plain-text rendering of a game snapshot.

use starlit_tictactoe::{GameSnapshot, Outcome, Phase, Player};

/// Draws the board with the hint as `*` and the winning line in brackets.
///
/// ```text
///     0   1   2
/// 0  [X] [X] [X]
/// 1   O   O   .
/// 2   .   .   .
/// ```
pub fn board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in snapshot.board.iter().enumerate() {
        out.push_str(&format!("{}  ", row));
        for (col, cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Some(Player::X) => 'X',
                Some(Player::O) => 'O',
                None if snapshot.best_move_hint == Some((row, col)) => '*',
                None => '.',
            };
            let on_line = snapshot
                .winning_line
                .is_some_and(|line| line.contains(&(row, col)));
            if on_line {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
            if col < 2 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// One-line status for the current phase.
pub fn status(snapshot: &GameSnapshot) -> String {
    let mut line = match snapshot.phase {
        Phase::HumanTurn => "Your move (X).".to_string(),
        Phase::BotTurn => "Bot is thinking...".to_string(),
        Phase::Terminal(Outcome::Winner(Player::X)) => "You win!".to_string(),
        Phase::Terminal(Outcome::Winner(Player::O)) => "The bot wins.".to_string(),
        Phase::Terminal(Outcome::Draw) => "Draw.".to_string(),
    };
    if snapshot.can_undo {
        line.push_str(" [undo available]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            board: [
                [Some(Player::X), Some(Player::X), Some(Player::X)],
                [Some(Player::O), Some(Player::O), None],
                [None, None, None],
            ],
            current_player: Player::X,
            outcome: Some(Outcome::Winner(Player::X)),
            winning_line: Some([(0, 0), (0, 1), (0, 2)]),
            best_move_hint: None,
            move_count: 5,
            phase: Phase::Terminal(Outcome::Winner(Player::X)),
            can_undo: true,
        }
    }

    #[test]
    fn test_winning_line_bracketed() {
        let text = board(&snapshot());
        assert!(text.contains("[X] [X] [X]"));
        assert!(text.contains(" O   O   . "));
    }

    #[test]
    fn test_hint_marked() {
        let mut snap = snapshot();
        snap.winning_line = None;
        snap.best_move_hint = Some((2, 2));
        let text = board(&snap);
        assert_eq!(text.lines().nth(3), Some("2   .   .   * "));
    }

    #[test]
    fn test_status_mentions_undo() {
        assert_eq!(status(&snapshot()), "You win! [undo available]");
    }
}
