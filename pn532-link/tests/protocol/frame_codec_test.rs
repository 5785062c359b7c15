#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use pn532_link::constants::{TFI_HOST_TO_PN532, TFI_PN532_TO_HOST};
use pn532_link::protocol::{Frame, Handshake};
use pn532_link::Error;

#[test]
fn firmware_command_matches_datasheet() -> Result<()> {
    let frame = Frame::encode(&[0x02], TFI_HOST_TO_PN532)?;
    assert_eq!(frame, common::fixtures::firmware_command_frame());
    Ok(())
}

#[test]
fn firmware_response_decodes() -> Result<()> {
    let raw = common::fixtures::firmware_response_frame();
    assert_eq!(Frame::decode(&raw)?, &common::fixtures::firmware_payload()[..]);
    assert_eq!(
        Frame::encode(&common::fixtures::firmware_payload(), TFI_PN532_TO_HOST)?,
        raw
    );
    Ok(())
}

#[test]
fn response_without_postamble_decodes() -> Result<()> {
    let mut raw = common::fixtures::firmware_response_frame();
    raw.pop();
    assert_eq!(Frame::decode(&raw)?.len(), 5);
    Ok(())
}

#[test]
fn leading_noise_is_skipped() -> Result<()> {
    let mut raw = vec![0x80, 0x80, 0x00];
    raw.extend(common::fixtures::firmware_response_frame());
    assert_eq!(Frame::decode(&raw)?, &common::fixtures::firmware_payload()[..]);
    Ok(())
}

#[test]
fn error_frame_is_application_error() {
    let raw = common::fixtures::error_frame();
    assert!(matches!(Frame::decode(&raw), Err(Error::ApplicationError)));
}

#[test]
fn corrupted_data_checksum() {
    let mut raw = common::fixtures::firmware_response_frame();
    raw[11] = raw[11].wrapping_add(1);
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn handshakes_are_recognized() {
    let ack = common::fixtures::bytes("00 00 ff 00 ff 00");
    let nack = common::fixtures::bytes("00 00 ff ff 00 00");
    assert_eq!(Handshake::classify(&ack), Some(Handshake::Ack));
    assert_eq!(Handshake::classify(&nack), Some(Handshake::Nack));
    assert_eq!(Handshake::classify(&ack[..5]), None);
}
