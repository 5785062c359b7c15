// pn532-link-rs/pn532-link/src/prelude.rs

//! Common imports: `use pn532_link::prelude::*;`.

pub use crate::channel::CommandChannel;
pub use crate::config::{LinkConfig, RetryPolicy};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::link::{CancelToken, Link, LinkState};
pub use crate::protocol::{Command, Frame, Handshake, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Error, FirmwareVersion, KeySlot, Result, SamMode, TargetInfo, Uid};

#[cfg(feature = "embedded-hal")]
pub use crate::transport::I2cTransport;

// Re-export small utilities for convenience
pub use crate::utils::{Hex, ms};
