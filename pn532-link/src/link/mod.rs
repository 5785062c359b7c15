// pn532-link-rs/pn532-link/src/link/mod.rs

//! Link state machine.
//!
//! A [`Link`] lives for exactly one operation: it borrows the transport and
//! the channel's scratch buffer, carries a fresh [`Budget`], and drives
//!
//! ```text
//! AwaitReady -> ReceiveFrame -> ValidFrame        (ACK, done)
//!                            -> ChecksumFailure   (NACK, back to AwaitReady)
//!                            -> ApplicationError  (no handshake, done)
//! ```
//!
//! Busy status bytes are retried at the transport level, before a frame is
//! ever decoded.

pub mod budget;

pub use budget::{Budget, CancelToken};

use log::{debug, trace, warn};

use crate::config::LinkConfig;
use crate::constants::{
    BUFFER_LEN, FRAME_OVERHEAD, HANDSHAKE_LEN, I2C_READY, MAX_PAYLOAD_LEN, TFI_HOST_TO_PN532,
};
use crate::protocol::{Frame, Handshake};
use crate::transport::Transport;
use crate::utils::Hex;
use crate::{Error, Result};

/// Receive-side link states, one transition per loop turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Waiting for the chip to signal a response
    AwaitReady,
    /// Reading and validating one raw frame
    ReceiveFrame,
    /// Frame accepted; `len` data bytes copied out
    ValidFrame { len: usize },
    /// Frame rejected; NACK pending
    ChecksumFailure,
    /// Chip sent its error frame
    ApplicationError,
}

/// One link operation over borrowed transport, buffer and config.
pub struct Link<'a, T: Transport + ?Sized> {
    transport: &'a mut T,
    buf: &'a mut [u8; BUFFER_LEN],
    config: &'a LinkConfig,
    budget: Budget<'a>,
}

impl<'a, T: Transport + ?Sized> Link<'a, T> {
    /// Borrow everything one operation needs; the budget starts now.
    pub fn new(
        transport: &'a mut T,
        buf: &'a mut [u8; BUFFER_LEN],
        config: &'a LinkConfig,
        cancel: Option<&'a CancelToken>,
    ) -> Self {
        Self {
            transport,
            buf,
            config,
            budget: Budget::start(&config.retry, cancel),
        }
    }

    /// Block until the chip signals ready, within the budget.
    pub fn wait_ready(&mut self) -> Result<()> {
        let policy = self.budget.policy;
        let mut polls = 0u32;
        loop {
            self.budget.check()?;
            if self.transport.is_ready()? {
                trace!("ready after {} polls", polls);
                return Ok(());
            }
            polls += 1;
            if policy.max_ready_polls.is_some_and(|max| polls >= max) {
                return Err(Error::Timeout);
            }
            if policy.ready_poll_interval.is_zero() {
                std::hint::spin_loop();
            } else {
                std::thread::sleep(policy.ready_poll_interval);
            }
        }
    }

    /// Read `len` bytes behind the status byte into `buf[1..=len]`,
    /// re-issuing the read while the chip reports busy.
    fn read_raw(&mut self, len: usize) -> Result<()> {
        let total = len + 1;
        if total > BUFFER_LEN {
            return Err(Error::InvalidLength {
                expected: BUFFER_LEN - 1,
                actual: len,
            });
        }
        let mut busy = 0u32;
        loop {
            self.transport.read(&mut self.buf[..total])?;
            if self.buf[0] == I2C_READY {
                return Ok(());
            }
            busy += 1;
            trace!("status byte {:#04x}, busy read #{}", self.buf[0], busy);
            if busy > self.budget.policy.max_busy_reads {
                return Err(Error::Timeout);
            }
            self.budget.check()?;
        }
    }

    /// Write an ACK or NACK.
    pub fn send_handshake(&mut self, handshake: Handshake) -> Result<()> {
        debug!("TX {}", handshake);
        self.transport.write(handshake.as_bytes())
    }

    /// Wait for and read the six handshake bytes that follow a command.
    pub fn read_handshake(&mut self) -> Result<[u8; HANDSHAKE_LEN]> {
        self.wait_ready()?;
        self.read_raw(HANDSHAKE_LEN)?;
        let mut received = [0u8; HANDSHAKE_LEN];
        received.copy_from_slice(&self.buf[1..=HANDSHAKE_LEN]);
        Ok(received)
    }

    /// The chip must answer a command frame with exactly the ACK frame.
    pub fn confirm_write(&mut self) -> Result<()> {
        let received = self.read_handshake()?;
        match Handshake::classify(&received) {
            Some(Handshake::Ack) => Ok(()),
            other => {
                warn!(
                    "command not acknowledged: {:#} ({})",
                    Hex(&received),
                    other.map_or("garbage".to_string(), |h| h.to_string())
                );
                Err(Error::WriteNotAcknowledged { received })
            }
        }
    }

    /// Encode `payload` as a host→chip frame, send it and wait for the
    /// ACK. The frame is re-sent up to `write_retries` times.
    pub fn send_command(&mut self, payload: &[u8]) -> Result<()> {
        let mut attempt = 0u32;
        loop {
            let n = Frame::encode_into(payload, TFI_HOST_TO_PN532, &mut self.buf[..])?;
            debug!("TX {:#}", Hex(&self.buf[..n]));
            self.transport.write(&self.buf[..n])?;
            match self.confirm_write() {
                Err(Error::WriteNotAcknowledged { .. })
                    if attempt < self.budget.policy.write_retries =>
                {
                    attempt += 1;
                    warn!("re-sending command frame (attempt {})", attempt + 1);
                }
                other => return other,
            }
        }
    }

    /// Receive one response frame and copy its data (command echo first)
    /// into `out`. The read is sized to `out.len()`.
    pub fn receive(&mut self, out: &mut [u8]) -> Result<usize> {
        let capacity = out.len().min(MAX_PAYLOAD_LEN);
        let read_len = capacity + FRAME_OVERHEAD;
        let mut state = LinkState::AwaitReady;

        loop {
            trace!("link state {:?}", state);
            state = match state {
                LinkState::AwaitReady => {
                    self.wait_ready()?;
                    LinkState::ReceiveFrame
                }
                LinkState::ReceiveFrame => {
                    self.read_raw(read_len)?;
                    let raw = &self.buf[1..=read_len];
                    debug!("RX {:#}", Hex(raw));
                    match Frame::decode_bounded(raw, self.config.seek_window, capacity) {
                        Ok(data) => {
                            out[..data.len()].copy_from_slice(data);
                            LinkState::ValidFrame { len: data.len() }
                        }
                        Err(Error::ApplicationError) => LinkState::ApplicationError,
                        Err(e) if e.is_retryable() => {
                            warn!("bad response frame: {}", e);
                            LinkState::ChecksumFailure
                        }
                        Err(e) => return Err(e),
                    }
                }
                LinkState::ChecksumFailure => {
                    self.budget.spend_nack()?;
                    self.send_handshake(Handshake::Nack)?;
                    LinkState::AwaitReady
                }
                LinkState::ValidFrame { len } => {
                    self.send_handshake(Handshake::Ack)?;
                    return Ok(len);
                }
                LinkState::ApplicationError => return Err(Error::ApplicationError),
            };
        }
    }

    /// NACKs sent so far during this operation.
    pub fn nacks_sent(&self) -> u32 {
        self.budget.nacks()
    }
}
