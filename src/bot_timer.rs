//! The bot's "thinking" delay.
//!
//! A scheduled bot move is a spawned sleep that sends its ticket back to the
//! session loop. Rescheduling or cancelling aborts the previous sleep; the
//! engine independently rejects tickets from an older generation.

use starlit_tictactoe::BotTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Owns at most one pending bot timer. Aborts it on drop.
#[derive(Debug)]
pub struct BotTimer {
    delay: Duration,
    tx: mpsc::UnboundedSender<BotTicket>,
    pending: Option<(BotTicket, JoinHandle<()>)>,
}

impl BotTimer {
    /// Creates a timer that delivers due tickets on `tx`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<BotTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedules `ticket`, replacing any other pending ticket.
    ///
    /// Scheduling the ticket that is already pending keeps the running timer.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: BotTicket) {
        if self.pending_ticket() == Some(ticket) {
            return;
        }
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Session loop gone; dropping bot ticket");
            }
        });
        self.pending = Some((ticket, handle));
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            debug!(generation = ticket.generation(), "Cancelling bot timer");
            handle.abort();
        }
    }

    /// Ticket of the pending timer.
    pub fn pending_ticket(&self) -> Option<BotTicket> {
        self.pending
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(ticket, _)| *ticket)
    }

    /// Brings the timer in line with the ticket the engine currently owes.
    pub fn sync(&mut self, owed: Option<BotTicket>) {
        match owed {
            Some(ticket) => self.schedule(ticket),
            None => self.cancel(),
        }
    }
}

impl Drop for BotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
