//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Uses simulated time: delays advance the clock instantly, so bounded waits
/// in drivers terminate deterministically in tests.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delay_calls: usize,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulated time without counting a delay call
    pub fn advance_us(&mut self, us: u64) {
        self.now_us = self.now_us.saturating_add(us);
    }

    /// Number of delay calls issued
    pub fn delay_calls(&self) -> usize {
        self.delay_calls
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.delay_calls += 1;
        self.advance_us(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
