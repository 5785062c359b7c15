// pn532-link-rs/pn532-link/src/protocol/commands/exchange.rs

//! InDataExchange and the MIFARE Classic tag commands it carries.

use crate::constants::{CMD_IN_DATA_EXCHANGE, MIFARE_READ};
use crate::types::{KeySlot, Uid};
use crate::Result;

/// Encode InDataExchange (0x40): command code, target number, then the
/// bytes forwarded to the tag.
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}

/// Tag data for a MIFARE Classic authentication of `block`:
/// 60|61 + block + key(6) + uid(4). The chip runs the cipher itself.
pub fn mifare_authenticate(block: u8, slot: KeySlot, key: &[u8; 6], uid: &Uid) -> Result<Vec<u8>> {
    let uid4 = uid.auth_bytes()?;
    let mut buf = Vec::with_capacity(12);
    buf.push(slot.auth_command());
    buf.push(block);
    buf.extend_from_slice(key);
    buf.extend_from_slice(&uid4);
    Ok(buf)
}

/// Tag data for a MIFARE 16-byte block read.
pub fn mifare_read(block: u8) -> Vec<u8> {
    vec![MIFARE_READ, block]
}
