//! Retry executor service
//!
//! Wraps a single provider invocation with a bounded, transient-only retry
//! policy and exponential backoff

use crate::config::RetrySettings;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::providers::ChatProvider;
use crate::utils::error::GatewayResult;
use std::time::Duration;
use tracing::warn;

/// Retry configuration
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total adapter invocations per call (including the first)
    pub max_attempts: u32,
    /// Base backoff unit; attempt `n` waits `base_delay * 2^n` before `n+1`
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl From<&RetrySettings> for RetryConfig {
    fn from(settings: &RetrySettings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            base_delay: Duration::from_millis(settings.base_delay_ms),
        }
    }
}

/// Executor applying the retry policy around provider calls
///
/// Holds no per-call state, so concurrent calls through the same executor
/// are fully independent.
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create an executor with the given policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Invoke the provider, retrying transient failures with backoff
    ///
    /// Terminal errors return after exactly one invocation. When attempts
    /// are exhausted the last failure is returned verbatim so the caller
    /// sees the underlying cause.
    pub async fn execute(
        &self,
        provider: &dyn ChatProvider,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        let mut attempt = 1u32;

        loop {
            match provider.complete(messages, options).await {
                Ok(completion) => return Ok(completion),
                Err(err) => {
                    if !err.is_transient() || attempt >= self.config.max_attempts {
                        return Err(err);
                    }

                    let delay = self.config.base_delay * 2u32.saturating_pow(attempt);
                    warn!(
                        provider = provider.name(),
                        attempt,
                        max_attempts = self.config.max_attempts,
                        "Transient failure ({}), retrying after {:?}",
                        err.kind(),
                        delay
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
