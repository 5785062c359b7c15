//! Utilities for pn532-link: small helpers shared by the link layer and
//! its tests.

pub mod hex;
pub mod timeout;

pub use hex::Hex;
pub use timeout::*;
