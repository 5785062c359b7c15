// pn532-link-rs/pn532-link/src/protocol/commands/mod.rs

//! Command encoding.

pub mod exchange;
pub mod system;
pub mod target;

pub use exchange::{encode_in_data_exchange, mifare_authenticate, mifare_read};
pub use system::{encode_get_firmware_version, encode_sam_configuration};
pub use target::encode_in_list_passive_target;

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION,
};
use crate::types::SamMode;

/// High-level Command enum. New commands should be added here and their
/// encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the chip for its IC code and firmware version.
    GetFirmwareVersion,
    /// Select how the SAM is used.
    SamConfiguration {
        /// SAM usage mode
        mode: SamMode,
        /// Virtual card timeout in 50 ms units
        timeout: u8,
        /// Drive the IRQ line when a response is ready
        use_irq: bool,
    },
    /// List a single passive target at the given baud rate / modulation.
    InListPassiveTarget {
        /// Baud rate and modulation, 0x00 for 106 kbps Type A
        brty: u8,
    },
    /// Send tag-level data to an activated target.
    InDataExchange {
        /// Logical target number from InListPassiveTarget
        target: u8,
        /// Bytes forwarded to the tag
        data: Vec<u8>,
        /// Number of tag answer bytes the caller expects back
        response_len: u8,
    },
}

impl Command {
    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the frame payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { brty } => encode_in_list_passive_target(*brty),
            Self::InDataExchange { target, data, .. } => encode_in_data_exchange(*target, data),
        }
    }

    /// Response data bytes (command echo included) to size the read for.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => system::FIRMWARE_VERSION_RESPONSE_LEN,
            Self::SamConfiguration { .. } => 1,
            Self::InListPassiveTarget { .. } => target::IN_LIST_RESPONSE_CAPACITY,
            Self::InDataExchange { response_len, .. } => 2 + *response_len as usize,
        }
    }
}
