// pn532-link-rs/pn532-link/src/link/budget.rs

//! Per-operation retry budget and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::RetryPolicy;
use crate::utils::Deadline;
use crate::{Error, Result};

/// Shared flag another thread can raise to stop a blocked link operation
/// at its next poll.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, unraised token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag; every holder sees it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether `cancel` was called since the last `reset`.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear the flag so the channel can be used again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Remaining allowance for one link operation.
#[derive(Debug)]
pub struct Budget<'a> {
    pub(crate) policy: &'a RetryPolicy,
    deadline: Deadline,
    cancel: Option<&'a CancelToken>,
    nacks: u32,
}

impl<'a> Budget<'a> {
    /// Start a budget: the deadline runs from now.
    pub fn start(policy: &'a RetryPolicy, cancel: Option<&'a CancelToken>) -> Self {
        Self {
            policy,
            deadline: Deadline::after(policy.timeout),
            cancel,
            nacks: 0,
        }
    }

    /// Fail once the operation was cancelled or ran out of time.
    pub fn check(&self) -> Result<()> {
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(Error::Cancelled);
        }
        if self.deadline.expired() {
            return Err(Error::Timeout);
        }
        Ok(())
    }

    /// Account for one more NACK.
    pub fn spend_nack(&mut self) -> Result<()> {
        if self.nacks >= self.policy.max_nack_retries {
            return Err(Error::Timeout);
        }
        self.nacks += 1;
        Ok(())
    }

    /// NACKs spent so far.
    pub fn nacks(&self) -> u32 {
        self.nacks
    }
}
