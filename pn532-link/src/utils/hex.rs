//! Lazy hex formatting for log output.
//!
//! `Hex` borrows the bytes and only formats when the log record is
//! actually emitted, so disabled `debug!`/`trace!` calls cost nothing.

use std::fmt;

/// Display wrapper: `{}` prints `0000ff02`, `{:#}` prints `00 00 ff 02`.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if f.alternate() && i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
