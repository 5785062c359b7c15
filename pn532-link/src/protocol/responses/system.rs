// pn532-link-rs/pn532-link/src/protocol/responses/system.rs

//! GetFirmwareVersion and SAMConfiguration answers.

use crate::constants::{CMD_GET_FIRMWARE_VERSION, CMD_SAM_CONFIGURATION};
use crate::protocol::commands::system::FIRMWARE_VERSION_RESPONSE_LEN;
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion answer: 0x03 + IC + Ver + Rev + Support
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::expect_response_code(data, CMD_GET_FIRMWARE_VERSION)?;
    parser::ensure_len(data, FIRMWARE_VERSION_RESPONSE_LEN)?;
    Ok(FirmwareVersion {
        ic: data[1],
        version: data[2],
        revision: data[3],
        support: data[4],
    })
}

/// SAMConfiguration answers with its bare echo (0x15).
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::expect_response_code(data, CMD_SAM_CONFIGURATION)
}
