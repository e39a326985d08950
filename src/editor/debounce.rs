//! Time-source-agnostic debouncer
//!
//! The host passes the current time (milliseconds) in; nothing here reads a
//! clock, so the same logic runs under `Date.now()` in the browser and under
//! plain numbers in tests.

/// Fires once after `delay_ms` of quiet following the last `schedule`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Start (or restart) the quiet window at `now_ms`, superseding any pending deadline
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// True exactly once when the pending deadline has been reached
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
