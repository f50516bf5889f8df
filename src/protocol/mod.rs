//! SPP protocol core implementation
//!
//! This module provides the wire format, slicing/reassembly orchestration,
//! and typed field extraction for SPP.

mod checksum;
mod codec;
mod error;
mod extract;
mod header;
mod packet;
mod processor;
mod slicer;
mod types;
mod wire;

pub use checksum::crc16;
pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use extract::{FieldDecode, extract};
pub use header::PacketHeader;
pub use packet::Packet;
pub use processor::{combine, prepare, prepare_with_size};
pub use slicer::{Slice, slice};
pub use types::PacketType;
pub use wire::{decode_uint, encode_uint};

/// Process id field offset in bytes
pub const PID_OFFSET: usize = 0;
/// Process id field size in bytes
pub const PID_SIZE: usize = 2;
/// Checksum field offset in bytes
pub const CRC_OFFSET: usize = 2;
/// Checksum field size in bytes
pub const CRC_SIZE: usize = 2;
/// Packet type field offset in bytes
pub const TYPE_OFFSET: usize = 4;
/// Packet type field size in bytes
pub const TYPE_SIZE: usize = 2;
/// Packet index field offset in bytes
pub const INDEX_OFFSET: usize = 6;
/// Packet index field size in bytes
pub const INDEX_SIZE: usize = 3;
/// Part count field offset in bytes
pub const PARTS_OFFSET: usize = 9;
/// Part count field size in bytes
pub const PARTS_SIZE: usize = 3;
/// Payload offset in bytes (equals the header size)
pub const PAYLOAD_OFFSET: usize = 12;

/// Header size in bytes
pub const HEADER_SIZE: usize = PID_SIZE + CRC_SIZE + TYPE_SIZE + INDEX_SIZE + PARTS_SIZE;

/// Default payload slice size in bytes, used by [`prepare`]
pub const DEFAULT_SLICE_SIZE: usize = 64;
