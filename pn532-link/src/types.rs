// pn532-link-rs/pn532-link/src/types.rs

//! Value types shared by the command layer.

use derive_more::Display;
use std::fmt;

use crate::Error;

/// Largest ISO/IEC 14443 Type A UID (triple size)
pub const MAX_UID_LEN: usize = 10;

/// UID - Newtype Pattern (1〜10 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of UID bytes (4, 7 or 10 on real tags).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a UID built through `TryFrom`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First four bytes, as used by MIFARE Classic authentication.
    pub fn auth_bytes(&self) -> Result<[u8; 4], Error> {
        match self.0.get(..4) {
            Some(&[a, b, c, d]) => Ok([a, b, c, d]),
            _ => Err(Error::InvalidLength {
                expected: 4,
                actual: self.0.len(),
            }),
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::Hex(&self.0))
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Answer to GetFirmwareVersion
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "PN5{:02x} v{}.{} (support {:#04x})", ic, version, revision, support)]
pub struct FirmwareVersion {
    /// IC code, 0x32 for a PN532
    pub ic: u8,
    /// Firmware version
    pub version: u8,
    /// Firmware revision
    pub revision: u8,
    /// Supported protocol bit set
    pub support: u8,
}

/// One target as reported by InListPassiveTarget (106 kbps Type A)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    /// Logical target number assigned by the chip
    pub target: u8,
    /// ATQA
    pub sens_res: u16,
    /// SAK
    pub sel_res: u8,
    /// NFCID1
    pub uid: Uid,
}

/// MIFARE Classic key slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    /// Key A (command 0x60)
    A,
    /// Key B (command 0x61)
    B,
}

impl KeySlot {
    /// MIFARE command byte that authenticates with this slot.
    pub fn auth_command(&self) -> u8 {
        match self {
            Self::A => crate::constants::MIFARE_AUTH_KEY_A,
            Self::B => crate::constants::MIFARE_AUTH_KEY_B,
        }
    }
}

/// SAMConfiguration mode byte
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// SAM not used
    Normal = 0x01,
    /// PN532 and SAM seen as one virtual card
    VirtualCard = 0x02,
    /// Host talks to the SAM directly
    WiredCard = 0x03,
    /// PN532 and SAM both visible to an external reader
    DualCard = 0x04,
}
