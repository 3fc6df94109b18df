//! Notifications emitted at well-defined edges of the game.
//!
//! Sound and haptics collaborators subscribe a sink; the engine calls every
//! sink synchronously, in registration order, when an edge is crossed.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::warn;

/// Something that happened to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted (human or bot).
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where the mark landed.
        position: Position,
    },
    /// The human completed a line.
    HumanVictory,
    /// The bot completed a line.
    BotVictory,
    /// The board filled with no line.
    Draw,
    /// A fresh game was started.
    GameReset,
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    /// Called once per event, synchronously.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl EventSink for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        if self.send(*event).is_err() {
            warn!(?event, "Event receiver dropped");
        }
    }
}

/// Registered sinks, notified in order.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink + Send>>,
}

impl EventBus {
    /// Adds a sink.
    pub fn subscribe(&mut self, sink: impl EventSink + Send + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Delivers `event` to every sink.
    pub fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.notify(&event);
        }
    }

    /// Number of registered sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
