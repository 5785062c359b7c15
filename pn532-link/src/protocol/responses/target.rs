// pn532-link-rs/pn532-link/src/protocol/responses/target.rs

//! InListPassiveTarget answers.

use crate::constants::CMD_IN_LIST_PASSIVE_TARGET;
use crate::protocol::parser;
use crate::types::{TargetInfo, Uid};
use crate::Result;

/// Decode an InListPassiveTarget answer for a 106 kbps Type A target.
/// Layout: 0x4B + NbTg + Tg + SENS_RES(2) + SEL_RES + NFCIDLength + NFCID [+ ATS]
///
/// Only the first target is decoded; anything after its UID is ignored.
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Option<TargetInfo>> {
    parser::expect_response_code(data, CMD_IN_LIST_PASSIVE_TARGET)?;
    let count = parser::byte_at(data, 1)?;
    if count == 0 {
        return Ok(None);
    }

    let target = parser::byte_at(data, 2)?;
    let sens_res = parser::be_u16_at(data, 3)?;
    let sel_res = parser::byte_at(data, 5)?;
    let uid_len = parser::byte_at(data, 6)? as usize;
    let uid = Uid::try_from(parser::slice_at(data, 7, uid_len)?)?;

    Ok(Some(TargetInfo {
        target,
        sens_res,
        sel_res,
        uid,
    }))
}
