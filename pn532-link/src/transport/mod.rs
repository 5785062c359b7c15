// pn532-link-rs/pn532-link/src/transport/mod.rs

//! Byte transports the link layer runs over.

#[cfg(feature = "embedded-hal")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
