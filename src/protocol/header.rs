//! SPP packet header
//!
//! The header is a fixed 12-byte prefix of big-endian unsigned fields.

use super::{
    CRC_OFFSET, CRC_SIZE, HEADER_SIZE, INDEX_OFFSET, INDEX_SIZE, PARTS_OFFSET, PARTS_SIZE,
    PID_OFFSET, PID_SIZE, PacketType, TYPE_OFFSET, TYPE_SIZE, wire,
};

/// SPP packet header (12 bytes)
///
/// # Wire Format
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Process Id (2)         |        Payload CRC (2)        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Packet Type (2)        |           Index (3)           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Index cont.  |                   Parts (3)                   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The crc covers the payload only, never the header fields. `index` is
/// 1-based and never exceeds `parts` for packets built by `prepare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketHeader {
    process_id: u16,
    crc: u16,
    packet_type: u16,
    index: u32,
    parts: u32,
}

impl PacketHeader {
    /// Create a new packet header
    #[must_use]
    pub const fn new(
        process_id: u16,
        crc: u16,
        packet_type: PacketType,
        index: u32,
        parts: u32,
    ) -> Self {
        Self {
            process_id,
            crc,
            packet_type: packet_type.as_u16(),
            index,
            parts,
        }
    }

    /// Get process id
    #[must_use]
    pub const fn process_id(&self) -> u16 {
        self.process_id
    }

    /// Get payload checksum
    #[must_use]
    pub const fn crc(&self) -> u16 {
        self.crc
    }

    /// Get the raw packet type field
    #[must_use]
    pub const fn type_raw(&self) -> u16 {
        self.packet_type
    }

    /// Get packet type, if it is one the core defines
    #[must_use]
    pub fn packet_type(&self) -> Option<PacketType> {
        PacketType::from_u16(self.packet_type)
    }

    /// Get the 1-based packet index within its multipart message
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Get the total packet count of the multipart message
    #[must_use]
    pub const fn parts(&self) -> u32 {
        self.parts
    }

    /// Convert to bytes (big-endian fields)
    ///
    /// Field values wider than their wire width are truncated to the
    /// low-order bits that fit.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];

        let mut put = |offset: usize, size: usize, value: u64| {
            bytes[offset..offset + size].copy_from_slice(&wire::encode_uint(value, size));
        };
        put(PID_OFFSET, PID_SIZE, u64::from(self.process_id));
        put(CRC_OFFSET, CRC_SIZE, u64::from(self.crc));
        put(TYPE_OFFSET, TYPE_SIZE, u64::from(self.packet_type));
        put(INDEX_OFFSET, INDEX_SIZE, u64::from(self.index));
        put(PARTS_OFFSET, PARTS_SIZE, u64::from(self.parts));

        bytes
    }

    /// Parse from bytes (big-endian fields)
    ///
    /// Fails only when fewer than 12 bytes are available. The crc field
    /// is read, not verified; validating it against the payload is the
    /// caller's decision (see [`crate::Packet::verify_crc`]).
    pub fn from_bytes(bytes: &[u8]) -> super::Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(super::Error::HeaderTooShort {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        let field = |offset: usize, size: usize| wire::decode_uint(&bytes[offset..offset + size]);

        Ok(Self {
            process_id: field(PID_OFFSET, PID_SIZE) as u16,
            crc: field(CRC_OFFSET, CRC_SIZE) as u16,
            packet_type: field(TYPE_OFFSET, TYPE_SIZE) as u16,
            index: field(INDEX_OFFSET, INDEX_SIZE) as u32,
            parts: field(PARTS_OFFSET, PARTS_SIZE) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = PacketHeader::new(16, 0xBEEF, PacketType::Data, 3, 7);
        let bytes = header.to_bytes();
        let decoded = PacketHeader::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, header);
        assert_eq!(decoded.process_id(), 16);
        assert_eq!(decoded.crc(), 0xBEEF);
        assert_eq!(decoded.packet_type(), Some(PacketType::Data));
        assert_eq!(decoded.index(), 3);
        assert_eq!(decoded.parts(), 7);
    }

    #[test]
    fn test_header_layout() {
        let header = PacketHeader::new(0x0110, 0x2022, PacketType::Data, 0x0304_05, 0x0607_08);
        let bytes = header.to_bytes();

        assert_eq!(
            bytes,
            [0x01, 0x10, 0x20, 0x22, 0x00, 0x00, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn test_index_truncated_to_three_bytes() {
        let header = PacketHeader::new(1, 0, PacketType::Data, 0x0100_0002, 1);
        let decoded = PacketHeader::from_bytes(&header.to_bytes()).unwrap();

        // only the low-order 24 bits of the index survive
        assert_eq!(decoded.index(), 2);
    }

    #[test]
    fn test_short_buffer_rejected() {
        let result = PacketHeader::from_bytes(&[0u8; HEADER_SIZE - 1]);
        assert!(matches!(
            result,
            Err(super::super::Error::HeaderTooShort { needed: 12, got: 11 })
        ));
    }

    #[test]
    fn test_unknown_type_preserved_raw() {
        let mut bytes = PacketHeader::new(1, 0, PacketType::Data, 1, 1).to_bytes();
        bytes[TYPE_OFFSET + 1] = 0x09;

        let decoded = PacketHeader::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.type_raw(), 9);
        assert_eq!(decoded.packet_type(), None);
    }
}
