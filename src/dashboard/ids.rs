use chrono::Utc;

use crate::types::TransactionId;

/// Hands out timestamp-derived ids, bumping by a millisecond whenever the
/// clock has not moved on since the previous id so that ids never repeat.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: fn() -> i64,
    last: i64
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(current_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: 0 }
    }

    pub fn next_id(&mut self) -> TransactionId {
        let now = (self.clock)();
        self.last = now.max(self.last.saturating_add(1));

        TransactionId::from_millis(self.last)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn current_millis() -> i64 {
    Utc::now().timestamp_millis()
}
