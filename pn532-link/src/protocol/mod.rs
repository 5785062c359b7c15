// pn532-link-rs/pn532-link/src/protocol/mod.rs

//! Frame codec and typed command layer.

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod handshake;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::{Frame, seek_start};
pub use handshake::Handshake;
pub use responses::Response;
