//! Single-slot cancellable tick scheduling
//!
//! Each animation stream owns one [`TickScheduler`]. Scheduling a new tick
//! cancels whatever was pending, so two ticks can never both fire and
//! double-advance a cursor. The scheduler has no thread or timer of its own:
//! the event loop calls [`TickScheduler::fire`] with the current time.

use std::time::Instant;

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    id: TickId,
    due: Instant,
}

/// Holds at most one pending tick
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<PendingTick>,
    next_id: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick at `due`, cancelling any pending one
    pub fn schedule(&mut self, due: Instant) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingTick { id, due });
        id
    }

    /// Cancel the pending tick, returning it if there was one
    pub fn cancel(&mut self) -> Option<TickId> {
        self.pending.take().map(|tick| tick.id)
    }

    /// Consume the pending tick if it is due at `now`
    pub fn fire(&mut self, now: Instant) -> Option<TickId> {
        match self.pending {
            Some(tick) if tick.due <= now => {
                self.pending = None;
                Some(tick.id)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending tick is due
    pub fn due(&self) -> Option<Instant> {
        self.pending.map(|tick| tick.due)
    }
}
