//! Retry policies and retry tokens.

use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::OciError;

/// Length of generated `opc-retry-token` values.
pub const RETRY_TOKEN_LENGTH: usize = 30;

/// Returns a fresh random retry token.
pub fn retry_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RETRY_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// When and how often a failed request is repeated.
///
/// Delays grow exponentially from `base_delay` and are capped at
/// `max_delay`; with `jitter` on, each delay is drawn uniformly from zero to
/// that bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::no_retry()
    }
}

impl RetryPolicy {
    /// A single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: false,
        }
    }

    /// Eight attempts with full-jitter exponential backoff capped at 30 s.
    pub fn default_policy() -> Self {
        Self {
            max_attempts: 8,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            jitter: true,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_delays(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self.max_delay = max_delay;
        self
    }

    /// Returns `true` if `error` is worth another attempt: transport
    /// failures, throttling, server errors and `409 IncorrectState`.
    pub fn is_retryable(error: &OciError) -> bool {
        match error {
            OciError::Client(e) => e.is_retryable(),
            OciError::Service(e) => {
                e.status == 429 || e.status >= 500 || (e.status == 409 && e.code == "IncorrectState")
            }
            _ => false,
        }
    }

    /// Returns `true` if attempt number `attempt` (1-based) failing with
    /// `error` should be followed by another.
    pub fn should_retry(&self, attempt: u32, error: &OciError) -> bool {
        attempt < self.max_attempts && Self::is_retryable(error)
    }

    /// Returns the sleep before the attempt following attempt `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let bound = self
            .base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay);
        if !self.jitter || bound.is_zero() {
            return bound;
        }
        let millis = u64::try_from(bound.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(rand::thread_rng().gen_range(0..=millis))
    }
}
