// pn532-link-rs/pn532-link/src/protocol/commands/target.rs

//! InListPassiveTarget.

use crate::constants::CMD_IN_LIST_PASSIVE_TARGET;

/// Room for a single Type A target with a triple size UID and a short ATS.
pub const IN_LIST_RESPONSE_CAPACITY: usize = 64;

/// Encode InListPassiveTarget (0x4A) for exactly one target.
pub fn encode_in_list_passive_target(brty: u8) -> Vec<u8> {
    vec![CMD_IN_LIST_PASSIVE_TARGET, 0x01, brty]
}
