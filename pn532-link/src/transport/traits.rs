// pn532-link-rs/pn532-link/src/transport/traits.rs

//! The `Transport` trait.

use crate::Result;

/// Transport trait abstracts raw bus I/O away from framing and link logic.
///
/// Every call blocks until the bus transaction completes. Implementations
/// know nothing about frames, checksums or handshakes.
pub trait Transport {
    /// Write raw bytes to the chip in one bus transaction.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Fill `buf` completely in one bus transaction. On I2C the first byte
    /// is the chip's status byte (0x01 once data is valid).
    fn read(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Non-blocking query of the chip's out-of-band ready signal.
    fn is_ready(&mut self) -> Result<bool>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read(buf)
    }

    fn is_ready(&mut self) -> Result<bool> {
        (**self).is_ready()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read(buf)
    }

    fn is_ready(&mut self) -> Result<bool> {
        (**self).is_ready()
    }
}
