// pn532-link-rs/pn532-link/src/device/mod.rs

//! Type-state PN532 device handle.

pub mod builder;
pub mod handle;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
