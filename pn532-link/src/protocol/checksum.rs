// pn532-link-rs/pn532-link/src/protocol/checksum.rs

//! Two's-complement frame checksums.

/// Compute Length Checksum (LCS): LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + DATA: TFI + sum(DATA) + DCS == 0
/// (mod 256)
pub fn dcs(tfi: u8, data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(tfi, data))
}

/// Running modulo-256 sum seeded with `seed`.
pub fn sum(seed: u8, data: &[u8]) -> u8 {
    data.iter().fold(seed, |acc, &b| acc.wrapping_add(b))
}

/// True when `value + check` wraps to zero.
pub fn verifies(value: u8, check: u8) -> bool {
    value.wrapping_add(check) == 0
}
