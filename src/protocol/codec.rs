//! SPP packet codec (encode/decode)
//!
//! This module converts between [`Packet`] values and their wire byte
//! representation. Decoding is zero-copy over the payload.

use bytes::Bytes;

use super::{Error, HEADER_SIZE, PAYLOAD_OFFSET, Packet, PacketHeader, Result};

/// Encode a packet to bytes
///
/// # Format
///
/// ```text
/// [HEADER (12 bytes)] [PAYLOAD (variable)]
/// ```
#[must_use]
pub fn encode(packet: &Packet) -> Vec<u8> {
    let payload = packet.payload();

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
    bytes.extend_from_slice(&packet.header().to_bytes());
    bytes.extend_from_slice(payload);

    bytes
}

/// Decode a packet from bytes
///
/// # Format
///
/// ```text
/// [HEADER (12 bytes)] [PAYLOAD (variable)]
/// ```
///
/// # Errors
///
/// Returns [`Error::HeaderTooShort`] if fewer than 12 bytes are
/// available. The crc header field is read but never verified here, and
/// unknown packet type values are preserved rather than rejected; both
/// checks belong to whichever layer wants them.
pub fn decode(bytes: Bytes) -> Result<Packet> {
    if bytes.len() < HEADER_SIZE {
        return Err(Error::HeaderTooShort {
            needed: HEADER_SIZE,
            got: bytes.len(),
        });
    }

    let header = PacketHeader::from_bytes(&bytes)?;
    let payload = bytes.slice(PAYLOAD_OFFSET..);

    Ok(Packet::from_parts(header, payload))
}
