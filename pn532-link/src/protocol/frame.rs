// pn532-link-rs/pn532-link/src/protocol/frame.rs

//! Normal information frames.

use crate::constants::{
    DEFAULT_SEEK_WINDOW, FRAME_ENVELOPE_LEN, MAX_PAYLOAD_LEN, POSTAMBLE, PREAMBLE, START_CODE,
    TFI_ERROR, TFI_PN532_TO_HOST,
};
use crate::protocol::checksum::{dcs, lcs, sum, verifies};
use crate::{Error, Result};

/// PN532 normal information frame.
///
/// Format: [Preamble(1)] [Start(2)] [Len(1)] [LCS(1)] [TFI(1)] [Data(Len-1)] [DCS(1)]
/// [Postamble(1)]
/// Start: 0x00 0xFF
/// Len counts TFI + Data. LCS and DCS are two's-complement checksums.
pub struct Frame;

impl Frame {
    /// Encode `payload` into a freshly allocated frame with direction byte `tfi`.
    pub fn encode(payload: &[u8], tfi: u8) -> Result<Vec<u8>> {
        let mut out = vec![0u8; FRAME_ENVELOPE_LEN + payload.len()];
        let n = Self::encode_into(payload, tfi, &mut out)?;
        out.truncate(n);
        Ok(out)
    }

    /// Encode into a caller-owned buffer and return the number of bytes
    /// written.
    pub fn encode_into(payload: &[u8], tfi: u8, out: &mut [u8]) -> Result<usize> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLong {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        let total = FRAME_ENVELOPE_LEN + payload.len();
        if out.len() < total {
            return Err(Error::InvalidLength {
                expected: total,
                actual: out.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let data_end = 6 + payload.len();
        out[0] = PREAMBLE;
        out[1..3].copy_from_slice(&START_CODE);
        out[3] = len;
        out[4] = lcs(len);
        out[5] = tfi;
        out[6..data_end].copy_from_slice(payload);
        out[data_end] = dcs(tfi, payload);
        out[data_end + 1] = POSTAMBLE;
        Ok(total)
    }

    /// Decode a response frame using the default seek window and no
    /// capacity limit beyond the frame format itself.
    pub fn decode(raw: &[u8]) -> Result<&[u8]> {
        Self::decode_bounded(raw, DEFAULT_SEEK_WINDOW, MAX_PAYLOAD_LEN)
    }

    /// Decode a chip→host frame out of `raw` and return its data bytes
    /// (command echo first).
    ///
    /// Bytes before the start code are skipped, as long as the code shows
    /// up within `window` bytes. The postamble is not checked: reads are
    /// sized so that it may fall just outside the buffer.
    pub fn decode_bounded(raw: &[u8], window: usize, capacity: usize) -> Result<&[u8]> {
        let mut pos = seek_start(raw, window)?;

        let truncated = |needed: usize| Error::FrameTruncated {
            needed,
            available: raw.len(),
        };

        let (len, lcs_actual) = match raw.get(pos..pos + 2) {
            Some(&[len, check]) => (len, check),
            _ => return Err(truncated(pos + 2)),
        };
        if !verifies(len, lcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: lcs(len),
                actual: lcs_actual,
            });
        }
        if len == 0 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        pos += 2;

        let tfi = *raw.get(pos).ok_or_else(|| truncated(pos + 1))?;
        if tfi == TFI_ERROR {
            return Err(Error::ApplicationError);
        }
        if tfi != TFI_PN532_TO_HOST {
            return Err(Error::UnexpectedDirection {
                expected: TFI_PN532_TO_HOST,
                actual: tfi,
            });
        }
        pos += 1;

        let data_len = len as usize - 1;
        if data_len > capacity {
            return Err(Error::CapacityExceeded {
                capacity,
                actual: data_len,
            });
        }

        let data = raw
            .get(pos..pos + data_len)
            .ok_or_else(|| truncated(pos + data_len))?;
        let dcs_actual = *raw
            .get(pos + data_len)
            .ok_or_else(|| truncated(pos + data_len + 1))?;
        let total = sum(tfi, data);
        if !verifies(total, dcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: 0u8.wrapping_sub(total),
                actual: dcs_actual,
            });
        }

        Ok(data)
    }
}

/// Return the offset just past the first `00 FF` start code found within
/// the first `window` bytes of `raw`.
pub fn seek_start(raw: &[u8], window: usize) -> Result<usize> {
    raw.windows(START_CODE.len())
        .take(window)
        .position(|w| w == START_CODE)
        .map(|pos| pos + START_CODE.len())
        .ok_or(Error::Desynchronized { window })
}
