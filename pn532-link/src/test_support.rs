//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same scripts.
#![allow(dead_code)]

use crate::device::{Device, Initialized};
use crate::transport::MockTransport;
use crate::Result;

/// Firmware answer of a stock PN532 (IC 0x32, v1.6, all protocols).
#[doc(hidden)]
pub const PN532_FIRMWARE: [u8; 5] = [0x03, 0x32, 0x01, 0x06, 0x07];

/// Build a MockTransport that ACKs every command and answers with the
/// given response payloads, in order.
#[doc(hidden)]
pub fn mock_with_exchanges(responses: &[&[u8]]) -> Result<MockTransport> {
    let mut mock = MockTransport::new();
    seed_exchanges(&mut mock, responses)?;
    Ok(mock)
}

/// Queue an ACK plus a response frame for each payload.
#[doc(hidden)]
pub fn seed_exchanges(mock: &mut MockTransport, responses: &[&[u8]]) -> Result<()> {
    for data in responses {
        mock.push_ack();
        mock.push_frame(data)?;
    }
    Ok(())
}

/// Queue the two exchanges `Device::initialize` performs.
#[doc(hidden)]
pub fn seed_init(mock: &mut MockTransport) -> Result<()> {
    seed_exchanges(mock, &[&PN532_FIRMWARE[..], &[0x15][..]])
}

/// Create an initialized Device whose mock then answers `responses`.
#[doc(hidden)]
pub fn initialized_mock_device(responses: &[&[u8]]) -> Result<Device<MockTransport, Initialized>> {
    let mut mock = MockTransport::new();
    seed_init(&mut mock)?;
    seed_exchanges(&mut mock, responses)?;
    Device::new(mock).initialize()
}
