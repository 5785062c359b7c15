// pn532-link-rs/pn532-link/src/device/builder.rs

//! `DeviceBuilder`.

use crate::config::LinkConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::link::CancelToken;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T: Transport> {
    transport: Option<T>,
    config: LinkConfig,
    cancel: Option<CancelToken>,
}

impl<T: Transport> Default for DeviceBuilder<T> {
    fn default() -> Self {
        Self {
            transport: None,
            config: LinkConfig::default(),
            cancel: None,
        }
    }
}

impl<T: Transport> DeviceBuilder<T> {
    /// Empty builder with the default link configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport the device talks over (required).
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Link configuration for the device's channel.
    pub fn with_config(mut self, config: LinkConfig) -> Self {
        self.config = config;
        self
    }

    /// Token that aborts the device's blocking waits.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Consume the builder and return an uninitialized Device.
    pub fn build_uninitialized(self) -> Result<Device<T, Uninitialized>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Bus("no transport configured".into()))?;
        let device = Device::with_config(transport, self.config);
        Ok(match self.cancel {
            Some(token) => device.with_cancel_token(token),
            None => device,
        })
    }

    /// Build and run the initialization sequence.
    pub fn build(self) -> Result<Device<T, Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
