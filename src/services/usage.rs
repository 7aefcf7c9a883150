//! Usage metering service
//!
//! Process-wide counters for call volume and token consumption, owned by
//! the gateway rather than held as ambient global state

use crate::models::chat::UsageStats;
use chrono::Utc;
use std::sync::Mutex;
use tracing::debug;

/// Thread-safe usage meter
///
/// `calls` counts every terminal outcome (success or failure after retries
/// are exhausted); `tokens` and `last_call` only advance on success.
/// Counters live for the process lifetime and are not persisted.
#[derive(Debug, Default)]
pub struct UsageMeter {
    stats: Mutex<UsageStats>,
}

impl UsageMeter {
    /// Create a meter with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful call and its reported token usage
    pub fn record_success(&self, tokens: u32) {
        let mut stats = self.stats.lock().expect("usage meter lock poisoned");
        stats.calls += 1;
        stats.tokens += u64::from(tokens);
        stats.last_call = Some(Utc::now());
        debug!(calls = stats.calls, tokens = stats.tokens, "Recorded successful call");
    }

    /// Record a failed call
    pub fn record_failure(&self) {
        let mut stats = self.stats.lock().expect("usage meter lock poisoned");
        stats.calls += 1;
        debug!(calls = stats.calls, "Recorded failed call");
    }

    /// Get a snapshot of the current counters
    pub fn snapshot(&self) -> UsageStats {
        self.stats.lock().expect("usage meter lock poisoned").clone()
    }

    /// Atomically zero all counters
    pub fn reset(&self) {
        let mut stats = self.stats.lock().expect("usage meter lock poisoned");
        *stats = UsageStats::default();
        debug!("Usage counters reset");
    }
}
