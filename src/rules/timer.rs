//! One-shot advancement timer on a logical millisecond clock.
//!
//! The engine owns exactly one of these. Time only moves when the caller
//! reports it through `advance_to`, which keeps the engine deterministic
//! and lets a real-time driver (see `session`) or a test decide what
//! "now" is.

use serde::{Deserialize, Serialize};

/// A pending advancement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAdvance {
    /// Round generation the advancement belongs to.
    pub generation: u64,
    /// Logical time at which it fires.
    pub due_at_ms: u64,
}

/// Cancellable one-shot timer.
#[derive(Clone, Debug, Default)]
pub struct AdvanceTimer {
    now_ms: u64,
    pending: Option<ScheduledAdvance>,
}

impl AdvanceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The pending advancement, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledAdvance> {
        self.pending
    }

    /// Schedule an advancement `delay_ms` from now, replacing any pending one.
    ///
    /// Returns the due time.
    pub fn schedule(&mut self, generation: u64, delay_ms: u64) -> u64 {
        let due_at_ms = self.now_ms.saturating_add(delay_ms);
        self.pending = Some(ScheduledAdvance { generation, due_at_ms });
        due_at_ms
    }

    /// Drop the pending advancement.
    pub fn cancel(&mut self) -> Option<ScheduledAdvance> {
        self.pending.take()
    }

    /// Put a fired advancement back so the next `advance_to` fires it again.
    ///
    /// Any advancement scheduled since is kept instead.
    pub fn rearm(&mut self, scheduled: ScheduledAdvance) {
        self.pending.get_or_insert(scheduled);
    }

    /// Move the clock to `now_ms` and fire the pending advancement if due.
    ///
    /// The clock never goes backwards. A fired advancement is returned
    /// once and then forgotten.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<ScheduledAdvance> {
        self.now_ms = self.now_ms.max(now_ms);
        match self.pending {
            Some(scheduled) if scheduled.due_at_ms <= self.now_ms => self.pending.take(),
            _ => None,
        }
    }
}
