// pn532-link-rs/pn532-link/src/lib.rs

//! pn532-link
//!
//! Host-side framing and link protocol for the NXP PN532 NFC controller
//! over I2C: frame codec, ACK/NACK handshakes, ready polling and a small
//! typed command layer on top.
#![warn(missing_docs)]

pub mod channel;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod link;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
