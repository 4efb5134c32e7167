//! Gameplay events.
//!
//! The scoring machine pushes events here; the loop driver drains them once
//! per frame and forwards them to the UI/render collaborators. Events never
//! feed back into the simulation.

/// Events emitted by the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A target was marked. Fired exactly once per target.
    TargetMarked { target: usize, score: u32 },
    /// The countdown reached zero; the session is over.
    SessionEnded { final_score: u32 },
}

/// FIFO queue of pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Removes and returns all queued events in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
