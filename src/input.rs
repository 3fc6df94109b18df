//! Parsing of typed commands into session actions.

use starlit_tictactoe::Position;
use tracing::instrument;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Tap a cell.
    Place(Position),
    /// Tap at coordinates that may be off the board; the engine ignores those.
    PlaceAt(usize, usize),
    /// Undo the last human+bot pair.
    Undo,
    /// Start a new game.
    Reset,
    /// Print the advisor's suggestion.
    Hint,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognised input {:?}; type `help` for commands", _0)]
pub struct InputError(pub String);

impl std::error::Error for InputError {}

/// Usage text shown for `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   place your mark, zero-based (e.g. `1 1` for the center)
  1-9           place your mark by cell number, left to right, top to bottom
  <label>       place by name: center, top-left, bottom-right, ...
  undo          take back your last move and the bot's reply
  reset | new   start over
  hint          show the suggested move
  help          show this text
  quit          leave";

/// Parses one line of input.
#[instrument]
pub fn parse(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();

    let keyword = match lower.as_str() {
        "undo" | "u" => Some(Input::Undo),
        "reset" | "new" | "r" => Some(Input::Reset),
        "hint" | "h" => Some(Input::Hint),
        "help" | "?" => Some(Input::Help),
        "quit" | "exit" | "q" => Some(Input::Quit),
        _ => None,
    };
    if let Some(input) = keyword {
        return Ok(input);
    }

    let parts: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok(Input::PlaceAt(row, col)),
            _ => Position::from_label(trimmed)
                .map(Input::Place)
                .ok_or_else(|| InputError(trimmed.to_string())),
        },
        [single] => {
            if let Ok(number) = single.parse::<usize>() {
                return number
                    .checked_sub(1)
                    .and_then(Position::from_index)
                    .map(Input::Place)
                    .ok_or_else(|| InputError(trimmed.to_string()));
            }
            Position::from_label(single)
                .map(Input::Place)
                .ok_or_else(|| InputError(trimmed.to_string()))
        }
        _ => Err(InputError(trimmed.to_string())),
    }
}
