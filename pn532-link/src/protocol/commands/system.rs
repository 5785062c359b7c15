// pn532-link-rs/pn532-link/src/protocol/commands/system.rs

//! GetFirmwareVersion and SAMConfiguration.

use crate::constants::{CMD_GET_FIRMWARE_VERSION, CMD_SAM_CONFIGURATION};
use crate::types::SamMode;

/// Echo + IC + Ver + Rev + Support
pub const FIRMWARE_VERSION_RESPONSE_LEN: usize = 5;

/// Encode GetFirmwareVersion (0x02); it takes no parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE_VERSION]
}

/// Encode SAMConfiguration (0x14). `timeout` only matters in virtual card
/// mode; `use_irq` lets the chip drive the IRQ line.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, mode as u8, timeout, use_irq as u8]
}
