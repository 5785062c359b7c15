// pn532-link-rs/pn532-link/src/protocol/responses/mod.rs

//! Response decoding, dispatched on the command that was sent.

pub mod exchange;
pub mod system;
pub mod target;

pub use exchange::decode_in_data_exchange;
pub use system::{decode_firmware_version, decode_sam_configuration};
pub use target::decode_in_list_passive_target;

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION,
};
use crate::types::{FirmwareVersion, TargetInfo};
use crate::Result;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Chip identification
    FirmwareVersion(FirmwareVersion),
    /// SAM mode accepted
    SamConfiguration,
    /// `None` when no target answered
    InListPassiveTarget(Option<TargetInfo>),
    /// Tag answer bytes after a successful (status 0x00) exchange
    InDataExchange(Vec<u8>),
}

impl Response {
    /// Decode a validated frame payload (command echo first) for the
    /// command `expected_cmd`.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> Result<Self> {
        match expected_cmd {
            CMD_GET_FIRMWARE_VERSION => decode_firmware_version(data).map(Self::FirmwareVersion),
            CMD_SAM_CONFIGURATION => {
                decode_sam_configuration(data).map(|()| Self::SamConfiguration)
            }
            CMD_IN_LIST_PASSIVE_TARGET => {
                decode_in_list_passive_target(data).map(Self::InListPassiveTarget)
            }
            CMD_IN_DATA_EXCHANGE => decode_in_data_exchange(data).map(Self::InDataExchange),
            _ => {
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }
}
