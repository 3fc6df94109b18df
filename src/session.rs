//! Interactive terminal session: the UI collaborator of the engine.
//!
//! One task multiplexes two stimuli, typed lines and due bot tickets, and
//! applies them to the engine one at a time.

use crate::bot_timer::BotTimer;
use crate::config::GameConfig;
use crate::cues;
use crate::input::{self, HELP, Input};
use crate::render;
use anyhow::Result;
use starlit_tictactoe::{BotTicket, GameEngine, GameEvent};
use std::io::Write;
use std::sync::mpsc as std_mpsc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// A running game bound to a bot timer.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    events: std_mpsc::Receiver<GameEvent>,
    timer: BotTimer,
    tickets: mpsc::UnboundedReceiver<BotTicket>,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let mut engine = GameEngine::new(config.engine_options());
        let (event_tx, events) = std_mpsc::channel();
        engine.subscribe(event_tx);

        let (ticket_tx, tickets) = mpsc::unbounded_channel();
        let timer = BotTimer::new(config.bot_delay(), ticket_tx);

        Self {
            engine,
            events,
            timer,
            tickets,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the bot timer.
    pub fn timer(&self) -> &BotTimer {
        &self.timer
    }

    /// Waits for the next due bot ticket.
    pub async fn next_ticket(&mut self) -> Option<BotTicket> {
        self.tickets.recv().await
    }

    /// Applies one parsed input and returns the lines to print.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, input: Input) -> Vec<String> {
        match input {
            Input::Place(pos) => self.engine.submit_human_move(pos),
            Input::PlaceAt(row, col) => self.engine.submit_human_move_at(row, col),
            Input::Undo => self.engine.undo_last_pair(),
            Input::Reset => self.engine.reset_game(),
            Input::Hint => return vec![self.hint_line()],
            Input::Help => return vec![HELP.to_string()],
            Input::Quit => return Vec::new(),
        }
        self.after_stimulus()
    }

    /// Applies a due bot ticket and returns the lines to print.
    #[instrument(skip(self), fields(ticket = ticket.generation()))]
    pub fn handle_ticket(&mut self, ticket: BotTicket) -> Vec<String> {
        self.engine.play_bot_turn(ticket);
        self.after_stimulus()
    }

    /// Board and status lines for the current state.
    pub fn screen(&self) -> Vec<String> {
        let snapshot = self.engine.snapshot();
        vec![render::board(&snapshot), render::status(&snapshot)]
    }

    fn hint_line(&self) -> String {
        match self.engine.best_move_hint() {
            Some(pos) => format!("Try {} (row {}, col {}).", pos, pos.row(), pos.col()),
            None => "No hint right now.".to_string(),
        }
    }

    /// Plays cues, re-arms the bot timer, redraws.
    fn after_stimulus(&mut self) -> Vec<String> {
        let mut lines = cues::play_all(self.events.try_iter());
        self.timer.sync(self.engine.pending_bot_turn());
        lines.extend(self.screen());
        lines
    }

    /// Runs until `quit`, end of input, or Ctrl-C.
    pub async fn run<R, W>(mut self, reader: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!("Session started");
        let mut lines = reader.lines();
        print(out, &["Starlit tic-tac-toe. Type `help` for commands.".to_string()])?;
        print(out, &self.screen())?;

        loop {
            let output = tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match input::parse(&line) {
                        Ok(Input::Quit) => break,
                        Ok(parsed) => self.handle_input(parsed),
                        Err(e) => vec![e.to_string()],
                    }
                }
                Some(ticket) = self.tickets.recv() => self.handle_ticket(ticket),
                _ = tokio::signal::ctrl_c() => {
                    debug!("Interrupted");
                    break;
                }
            };
            print(out, &output)?;
        }

        self.timer.cancel();
        info!(moves = self.engine.move_count(), "Session ended");
        Ok(())
    }
}

fn print<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
