// pn532-link-rs/pn532-link/src/config.rs
//! Link configuration: retry budget and frame search window.

use std::time::Duration;

use crate::constants::DEFAULT_SEEK_WINDOW;
use crate::utils::timeout::{DEFAULT_OPERATION_TIMEOUT_MS, ms};

/// Bounds for every loop the link layer may spin in. Each write and each
/// read gets a fresh budget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Ready-line polls per wait; `None` leaves only `timeout` in charge.
    pub max_ready_polls: Option<u32>,
    /// Re-issued raw reads while the status byte reports busy.
    pub max_busy_reads: u32,
    /// NACKs sent for corrupted responses before giving up.
    pub max_nack_retries: u32,
    /// Extra attempts at a command frame the chip did not ACK.
    pub write_retries: u32,
    /// Wall-clock limit for one operation.
    pub timeout: Option<Duration>,
    /// Pause between ready polls; zero spins.
    pub ready_poll_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_ready_polls: None,
            max_busy_reads: 32,
            max_nack_retries: 8,
            write_retries: 0,
            timeout: Some(ms(DEFAULT_OPERATION_TIMEOUT_MS)),
            ready_poll_interval: Duration::from_micros(100),
        }
    }
}

impl RetryPolicy {
    /// Never give up: no poll, busy, NACK or time limit.
    pub fn unbounded() -> Self {
        Self {
            max_ready_polls: None,
            max_busy_reads: u32::MAX,
            max_nack_retries: u32::MAX,
            write_retries: 0,
            timeout: None,
            ready_poll_interval: Duration::ZERO,
        }
    }
}

/// Link settings shared by every operation of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Bytes scanned for the 00 FF start code before declaring the link
    /// desynchronized.
    pub seek_window: usize,
    /// Retry and timeout bounds
    pub retry: RetryPolicy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            seek_window: DEFAULT_SEEK_WINDOW,
            retry: RetryPolicy::default(),
        }
    }
}

impl LinkConfig {
    /// Defaults: 263-byte seek window, 1 s per operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set how far to scan for the start code.
    pub fn with_seek_window(mut self, window: usize) -> Self {
        self.seek_window = window;
        self
    }

    /// Set the per-operation deadline; `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.retry.timeout = timeout;
        self
    }

    /// Re-send unacknowledged command frames up to `retries` times.
    pub fn with_write_retries(mut self, retries: u32) -> Self {
        self.retry.write_retries = retries;
        self
    }
}
