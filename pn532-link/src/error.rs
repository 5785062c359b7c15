// pn532-link-rs/pn532-link/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying bus transaction failed.
    #[error("bus error: {0}")]
    Bus(String),

    /// A buffer or field has the wrong size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The payload does not fit in a normal frame.
    #[error("payload too long: at most {max} bytes fit in a frame, got {actual}")]
    PayloadTooLong { max: usize, actual: usize },

    /// LCS or DCS does not add up.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// The declared frame runs past the bytes that were read.
    #[error("frame truncated: needed {needed} bytes, only {available} available")]
    FrameTruncated { needed: usize, available: usize },

    /// The frame carries more data than the caller asked for.
    #[error("response of {actual} bytes exceeds requested capacity {capacity}")]
    CapacityExceeded { capacity: usize, actual: usize },

    /// No start code where a frame should be.
    #[error("start marker not found within {window} bytes")]
    Desynchronized { window: usize },

    /// The frame was not sent by the chip.
    #[error("unexpected frame identifier: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedDirection { expected: u8, actual: u8 },

    /// The chip answered with its error frame (TFI 0x7F).
    #[error("chip reported an application level error")]
    ApplicationError,

    /// The chip did not answer a command frame with ACK.
    #[error("write not acknowledged: received {received:02x?}")]
    WriteNotAcknowledged { received: [u8; 6] },

    /// The response echo does not belong to the command sent.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// Non-zero status byte in a command response (e.g. InDataExchange).
    #[error("command failed with status {status:#04x}")]
    CommandStatus { status: u8 },

    /// A retry budget or deadline ran out.
    #[error("operation timed out")]
    Timeout,

    /// The operation's cancel token was raised.
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Errors the link layer answers with a NACK and a fresh read instead
    /// of surfacing them.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::ChecksumMismatch { .. } | Error::FrameTruncated { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
