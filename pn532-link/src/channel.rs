// pn532-link-rs/pn532-link/src/channel.rs

//! Command channel: the write / read / exchange surface over one transport.

use crate::config::LinkConfig;
use crate::constants::{BUFFER_LEN, MAX_PAYLOAD_LEN};
use crate::link::{CancelToken, Link};
use crate::transport::Transport;
use crate::{Error, Result};

/// Command channel over one transport.
///
/// The channel owns the scratch buffer frames are assembled and parsed in,
/// and every operation takes `&mut self`, so two exchanges can never
/// interleave. Share a channel between threads by wrapping it in a mutex.
pub struct CommandChannel<T: Transport> {
    transport: T,
    config: LinkConfig,
    cancel: Option<CancelToken>,
    buf: [u8; BUFFER_LEN],
}

impl<T: Transport> CommandChannel<T> {
    /// Channel over `transport` with the default [`LinkConfig`].
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, LinkConfig::default())
    }

    /// Channel over `transport` with an explicit retry and seek setup.
    pub fn with_config(transport: T, config: LinkConfig) -> Self {
        Self {
            transport,
            config,
            cancel: None,
            buf: [0u8; BUFFER_LEN],
        }
    }

    /// Attach a token that aborts blocked waits and retry loops.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Active link configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Replace the configuration used by the next operation.
    pub fn set_config(&mut self, config: LinkConfig) {
        self.config = config;
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Drop the channel and hand back the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn link(&mut self) -> Link<'_, T> {
        Link::new(
            &mut self.transport,
            &mut self.buf,
            &self.config,
            self.cancel.as_ref(),
        )
    }

    /// Send `payload` as a command frame and wait for the chip's ACK.
    pub fn write(&mut self, payload: &[u8]) -> Result<()> {
        self.link().send_command(payload)
    }

    /// Receive one response into `out`, sized to `out.len()`, and return
    /// the number of data bytes (command echo included).
    pub fn read_into(&mut self, out: &mut [u8]) -> Result<usize> {
        self.link().receive(out)
    }

    /// Receive one response of at most `capacity` data bytes.
    pub fn read(&mut self, capacity: usize) -> Result<Vec<u8>> {
        check_capacity(capacity)?;
        let mut out = vec![0u8; capacity];
        let n = self.read_into(&mut out)?;
        out.truncate(n);
        Ok(out)
    }

    /// Write a command, then read its response. An impossible `capacity`
    /// is rejected before anything goes on the wire.
    pub fn exchange(&mut self, payload: &[u8], capacity: usize) -> Result<Vec<u8>> {
        check_capacity(capacity)?;
        self.write(payload)?;
        self.read(capacity)
    }
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity > MAX_PAYLOAD_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_PAYLOAD_LEN,
            actual: capacity,
        });
    }
    Ok(())
}
