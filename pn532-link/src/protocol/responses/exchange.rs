// pn532-link-rs/pn532-link/src/protocol/responses/exchange.rs

//! InDataExchange answers.

use crate::constants::CMD_IN_DATA_EXCHANGE;
use crate::protocol::parser;
use crate::{Error, Result};

/// Low six bits of the status byte carry the error code; bit 6 (MI) and
/// bit 7 (NAD) are flags.
const STATUS_ERROR_MASK: u8 = 0x3F;

/// Status error code the chip reports for a failed MIFARE authentication
pub const STATUS_AUTH_FAILED: u8 = 0x14;

/// Decode an InDataExchange answer: 0x41 + Status + tag data.
/// A non-zero error code is surfaced as `Error::CommandStatus`.
pub fn decode_in_data_exchange(data: &[u8]) -> Result<Vec<u8>> {
    parser::expect_response_code(data, CMD_IN_DATA_EXCHANGE)?;
    let status = parser::byte_at(data, 1)?;
    if status & STATUS_ERROR_MASK != 0 {
        return Err(Error::CommandStatus { status });
    }
    Ok(data[2..].to_vec())
}
