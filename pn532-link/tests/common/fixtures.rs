// fixtures.rs: commonly used frames and payloads, written as hex so they
// can be compared against datasheet listings.

pub fn bytes(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).unwrap()
}

/// GetFirmwareVersion command frame, host→chip
pub fn firmware_command_frame() -> Vec<u8> {
    bytes("00 00 ff 02 fe d4 02 2a 00")
}

/// GetFirmwareVersion answer data (command echo first)
pub fn firmware_payload() -> Vec<u8> {
    bytes("03 32 01 06 07")
}

/// GetFirmwareVersion answer frame, chip→host
pub fn firmware_response_frame() -> Vec<u8> {
    bytes("00 00 ff 06 fa d5 03 32 01 06 07 e8 00")
}

pub fn sam_command_payload() -> Vec<u8> {
    bytes("14 01 14 01")
}

/// InListPassiveTarget answer with one MIFARE Classic 1K tag
pub fn in_list_payload() -> Vec<u8> {
    bytes("4b 01 01 00 04 08 04 de ad be ef")
}

pub fn sample_uid() -> Vec<u8> {
    bytes("de ad be ef")
}

/// Application error frame
pub fn error_frame() -> Vec<u8> {
    bytes("00 00 ff 01 ff 7f 81 00")
}
