// pn532-link-rs/pn532-link/src/transport/i2c.rs

//! `Transport` over an `embedded-hal` 1.0 I2C bus plus the PN532 IRQ line.
//!
//! The IRQ line is active low: the chip pulls it down once a response or
//! handshake is waiting. Boards without the line wired can use
//! [`I2cTransport::without_irq`]; readiness is then inferred solely from
//! the status byte at the head of every read.

use core::convert::Infallible;

use embedded_hal::digital::{self, InputPin};
use embedded_hal::i2c::{Error as _, I2c};

use crate::constants::DEFAULT_I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PN532 on an I2C bus, with its IRQ line as the ready signal.
pub struct I2cTransport<I2C, IRQ> {
    i2c: I2C,
    irq: IRQ,
    address: u8,
}

/// Stand-in for an unconnected IRQ line; always reads as asserted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIrq;

impl digital::ErrorType for NoIrq {
    type Error = Infallible;
}

impl InputPin for NoIrq {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(true)
    }
}

impl<I2C: I2c, IRQ: InputPin> I2cTransport<I2C, IRQ> {
    /// Use `i2c` at the default address 0x24 and `irq` as the ready line.
    pub fn new(i2c: I2C, irq: IRQ) -> Self {
        Self {
            i2c,
            irq,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Use a non-default 7-bit address.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// 7-bit bus address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus and pin.
    pub fn release(self) -> (I2C, IRQ) {
        (self.i2c, self.irq)
    }
}

impl<I2C: I2c> I2cTransport<I2C, NoIrq> {
    /// Transport for boards without the IRQ line wired.
    pub fn without_irq(i2c: I2C) -> Self {
        Self::new(i2c, NoIrq)
    }
}

impl<I2C: I2c, IRQ: InputPin> Transport for I2cTransport<I2C, IRQ> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.i2c
            .write(self.address, data)
            .map_err(|e| Error::Bus(format!("i2c write: {:?}", e.kind())))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        self.i2c
            .read(self.address, buf)
            .map_err(|e| Error::Bus(format!("i2c read: {:?}", e.kind())))
    }

    fn is_ready(&mut self) -> Result<bool> {
        self.irq
            .is_low()
            .map_err(|e| Error::Bus(format!("irq: {:?}", digital::Error::kind(&e))))
    }
}
