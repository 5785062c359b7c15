//! Timeout helpers used by the link layer.

use std::time::{Duration, Instant};

/// Default time budget for one link operation (ready wait + reads +
/// retries) in milliseconds.
pub const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Point in time after which an operation gives up. `None` never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// Deadline `timeout` from now; `None` never expires.
    pub fn after(timeout: Option<Duration>) -> Self {
        Self(timeout.map(|t| Instant::now() + t))
    }

    /// Deadline that never expires.
    pub fn never() -> Self {
        Self(None)
    }

    /// Whether the deadline has passed.
    pub fn expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}
