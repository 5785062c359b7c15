// pn532-link-rs/pn532-link/src/transport/mock.rs

//! Scripted in-memory transport for tests.

use std::collections::VecDeque;

use crate::constants::{ACK_FRAME, I2C_READY, NACK_FRAME, TFI_PN532_TO_HOST};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written bytes and answers
/// reads from a queue of scripted raw responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every `write`, in order
    pub sent: Vec<Vec<u8>>,
    /// Raw read responses, status byte included
    pub responses: VecDeque<Vec<u8>>,
    /// Length of every read request, in order
    pub read_sizes: Vec<usize>,
    /// Scripted answers for `is_ready`; once drained the chip is ready
    pub ready_script: VecDeque<bool>,
    /// Number of `is_ready` calls
    pub ready_polls: usize,
}

impl MockTransport {
    /// Empty mock; reads fail until something is queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one raw read response. Shorter responses are padded with
    /// zeros up to the requested size, longer ones are cut.
    pub fn push_read(&mut self, raw: Vec<u8>) {
        self.responses.push_back(raw);
    }

    /// Queue a ready ACK handshake.
    pub fn push_ack(&mut self) {
        self.push_status_and(&ACK_FRAME);
    }

    /// Queue a ready NACK handshake.
    pub fn push_nack(&mut self) {
        self.push_status_and(&NACK_FRAME);
    }

    /// Queue a ready chip→host frame carrying `data`.
    pub fn push_frame(&mut self, data: &[u8]) -> Result<()> {
        let frame = Frame::encode(data, TFI_PN532_TO_HOST)?;
        self.push_status_and(&frame);
        Ok(())
    }

    /// Queue a read whose status byte says the chip is still busy.
    pub fn push_busy(&mut self) {
        self.responses.push_back(vec![0x00]);
    }

    /// Script the next `is_ready` answers.
    pub fn script_ready(&mut self, answers: &[bool]) {
        self.ready_script.extend(answers.iter().copied());
    }

    /// Take the most recent write.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    fn push_status_and(&mut self, bytes: &[u8]) {
        let mut raw = Vec::with_capacity(1 + bytes.len());
        raw.push(I2C_READY);
        raw.extend_from_slice(bytes);
        self.responses.push_back(raw);
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        self.read_sizes.push(buf.len());
        let raw = self
            .responses
            .pop_front()
            .ok_or_else(|| Error::Bus("mock: no queued response".into()))?;
        let n = raw.len().min(buf.len());
        buf[..n].copy_from_slice(&raw[..n]);
        buf[n..].fill(0);
        Ok(())
    }

    fn is_ready(&mut self) -> Result<bool> {
        self.ready_polls += 1;
        Ok(self.ready_script.pop_front().unwrap_or(true))
    }
}
