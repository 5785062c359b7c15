// pn532-link-rs/pn532-link/src/protocol/handshake.rs

//! ACK and NACK handshake frames.

use derive_more::Display;

use crate::constants::{ACK_FRAME, HANDSHAKE_LEN, NACK_FRAME};

/// Fixed six byte frames used to confirm or reject the previous transfer.
/// They carry no payload and are matched byte for byte.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Handshake {
    /// Positive acknowledgement
    #[display(fmt = "ACK")]
    Ack,
    /// Request to repeat the last frame
    #[display(fmt = "NACK")]
    Nack,
}

impl Handshake {
    /// Wire bytes of this handshake.
    pub fn as_bytes(&self) -> &'static [u8; HANDSHAKE_LEN] {
        match self {
            Self::Ack => &ACK_FRAME,
            Self::Nack => &NACK_FRAME,
        }
    }

    /// Classify exactly six received bytes. Anything else, including a
    /// longer buffer that merely starts with a handshake, is `None`.
    pub fn classify(bytes: &[u8]) -> Option<Self> {
        if bytes == ACK_FRAME {
            Some(Self::Ack)
        } else if bytes == NACK_FRAME {
            Some(Self::Nack)
        } else {
            None
        }
    }
}
