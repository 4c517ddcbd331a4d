//! Retry policy for the search/scrape service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded linear-backoff retry for transient failures.
///
/// Attempt `n` (zero-based) waits `(n + 1) × base_delay` before the next try.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub max_retries: usize,
    /// Delay unit for linear backoff.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: usize, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay before retrying after the failed attempt `attempt`.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        self.base_delay.saturating_mul(attempt as u32 + 1)
    }
}
