//! SlotEvent: Outbound notifications of the round engine
//!
//! Events are plain data. The engine returns the events of every transition
//! to the caller and also hands each one to the registered [`EventSink`]s,
//! in emission order.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{CutInOutcome, ReelPosition, Symbol, WinOutcome};

/// A round notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlotEvent {
    /// Lever accepted. Fired once per accepted round start, before the bet.
    HapticCue,

    /// Credit balance changed
    CreditChanged {
        /// Balance after the change
        balance: i64,
    },

    /// Round accepted, reels spinning
    RoundStarted {
        /// Cut-in the presenter should play
        cut_in: CutInOutcome,
    },

    /// One reel stopped
    ReelStopped {
        position: ReelPosition,
        /// Middle-row symbol on that reel
        symbol: Symbol,
    },

    /// Third reel stopped, payout applied
    AllReelsStopped { outcome: WinOutcome },

    /// Balance dropped to zero or below after settlement
    GameOver,
}

impl SlotEvent {
    /// Get event type name (matches the serde tag)
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::HapticCue => "haptic_cue",
            Self::CreditChanged { .. } => "credit_changed",
            Self::RoundStarted { .. } => "round_started",
            Self::ReelStopped { .. } => "reel_stopped",
            Self::AllReelsStopped { .. } => "all_reels_stopped",
            Self::GameOver => "game_over",
        }
    }

    /// Round outcome, if this event settles a round
    pub fn outcome(&self) -> Option<WinOutcome> {
        match self {
            Self::AllReelsStopped { outcome } => Some(*outcome),
            _ => None,
        }
    }
}

/// Subscriber for round events
pub trait EventSink {
    fn on_event(&mut self, event: &SlotEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&SlotEvent),
{
    fn on_event(&mut self, event: &SlotEvent) {
        self(event)
    }
}

/// Recording sink, useful for presenters that poll and for tests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<SlotEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SlotEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = SlotEvent>) {
        self.events.extend(events);
    }

    pub fn events(&self) -> &[SlotEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Count events with the given type name
    pub fn count(&self, type_name: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.type_name() == type_name)
            .count()
    }

    /// Take all recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<SlotEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// One JSON object per line
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &SlotEvent) {
        self.push(*event);
    }
}
