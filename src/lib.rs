//! SPP (Sliced Packet Protocol) - binary framing for multipart payload transport
//!
//! This library splits an arbitrary byte payload into a sequence of fixed-size
//! checksummed packets, reassembles received packets back into the original
//! payload, and extracts strongly-typed fields from raw byte buffers at
//! caller-specified offsets. It produces and consumes in-memory byte buffers
//! only; the transport that moves those bytes is the caller's concern.
//!
//! # Quick Start
//!
//! ```rust
//! use spp::{Packet, combine, prepare};
//!
//! // Split an outbound payload into packets (64-byte slices by default)
//! let payload: Vec<u8> = (0..200u8).collect();
//! let packets = prepare(7, payload.clone());
//!
//! // Encode each packet for the transport, then decode on the far side
//! let wire: Vec<Vec<u8>> = packets.iter().map(Packet::encode).collect();
//! let received = wire
//!     .iter()
//!     .map(|bytes| Packet::decode(bytes.clone()))
//!     .collect::<spp::Result<Vec<Packet>>>()?;
//!
//! // Reassemble the original payload
//! let restored = combine(&received, |bytes| Ok::<_, spp::Error>(bytes.to_vec()));
//! assert_eq!(restored.as_deref(), Some(payload.as_slice()));
//! # Ok::<(), spp::Error>(())
//! ```
//!
//! # Features
//!
//! - **Zero-copy slicing** - payload slices share the source buffer via [`bytes`]
//! - **Fixed 12-byte header** - big-endian fields at compile-time offsets
//! - **Built-in checksums** - CRC-16/CCITT-FALSE per payload slice
//! - **Typed field extraction** - integers, strings, bit-flags, and a
//!   decimal-scaled float recovered from reassembled payloads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    DEFAULT_SLICE_SIZE, Error, FieldDecode, HEADER_SIZE, Packet, PacketHeader, PacketType, Result,
    Slice, combine, crc16, decode, decode_uint, encode, encode_uint, extract, prepare,
    prepare_with_size, slice,
};
