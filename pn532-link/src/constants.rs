// pn532-link-rs/pn532-link/src/constants.rs
//! Protocol constants for the PN532 host interface

/// Frame preamble byte
pub const PREAMBLE: u8 = 0x00;

/// Start code: 0x00 0xFF
pub const START_CODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const POSTAMBLE: u8 = 0x00;

/// TFI for frames sent by the host (D4) and by the chip (D5)
pub const TFI_HOST_TO_PN532: u8 = 0xD4;
/// TFI for frames sent by the chip
pub const TFI_PN532_TO_HOST: u8 = 0xD5;

/// TFI of the chip's application error frame
pub const TFI_ERROR: u8 = 0x7F;

/// Handshake frames exchanged around every command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
/// NACK: asks the sender to repeat its last frame
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];
/// Length of ACK and NACK
pub const HANDSHAKE_LEN: usize = 6;

/// Bytes a response adds around its data when sizing a raw read
/// (preamble, start code, LEN, LCS, TFI, DCS).
pub const FRAME_OVERHEAD: usize = 7;

/// Bytes of a complete encoded frame around its payload
/// (preamble, start code, LEN, LCS, TFI, DCS, postamble).
pub const FRAME_ENVELOPE_LEN: usize = 8;

/// Largest payload an encoded frame can carry (LEN is one byte and
/// also counts the TFI).
pub const MAX_PAYLOAD_LEN: usize = 254;

/// I2C status byte prefixed to every read; 0x01 once the chip has data
pub const I2C_READY: u8 = 0x01;

/// Scratch buffer size: status byte + largest frame
pub const BUFFER_LEN: usize = 1 + 255 + FRAME_ENVELOPE_LEN;

/// Default span scanned for the start code
pub const DEFAULT_SEEK_WINDOW: usize = 263;

/// Default 7-bit I2C address (0x48 >> 1)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x24;

/// Command codes
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration command code
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InDataExchange command code
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InListPassiveTarget command code
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// InListPassiveTarget baud rate: 106 kbps ISO/IEC 14443 Type A
pub const BRTY_ISO14443A: u8 = 0x00;

/// MIFARE Classic commands carried inside InDataExchange
pub const MIFARE_AUTH_KEY_A: u8 = 0x60;
/// MIFARE Classic authenticate with key B
pub const MIFARE_AUTH_KEY_B: u8 = 0x61;
/// MIFARE 16-byte read
pub const MIFARE_READ: u8 = 0x30;
/// MIFARE Classic block size
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Transport key of factory-fresh MIFARE Classic cards
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF; 6];
