//! SPP packet implementation

use bytes::Bytes;

use super::{PacketHeader, PacketType, checksum};

/// SPP packet
///
/// One framed unit of the protocol: a fixed 12-byte header followed by a
/// variable-length payload slice. Packets are immutable once built and
/// hold no state beyond a single prepare/combine call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packet {
    /// Packet header
    header: PacketHeader,
    /// Packet payload
    payload: Bytes,
}

impl Packet {
    /// Create a new packet, computing the payload crc
    pub fn new(
        process_id: u16,
        packet_type: PacketType,
        index: u32,
        parts: u32,
        payload: impl Into<Bytes>,
    ) -> Self {
        let payload = payload.into();
        let crc = checksum::crc16(&payload);
        let header = PacketHeader::new(process_id, crc, packet_type, index, parts);

        Self { header, payload }
    }

    /// Create a packet from an already-built header and payload
    ///
    /// The header is trusted as-is; no crc is computed or checked.
    #[must_use]
    pub fn from_parts(header: PacketHeader, payload: Bytes) -> Self {
        Self { header, payload }
    }

    /// Get header
    #[must_use]
    pub const fn header(&self) -> &PacketHeader {
        &self.header
    }

    /// Get process id
    #[must_use]
    pub const fn process_id(&self) -> u16 {
        self.header.process_id()
    }

    /// Get payload checksum carried in the header
    #[must_use]
    pub const fn crc(&self) -> u16 {
        self.header.crc()
    }

    /// Get packet type, if it is one the core defines
    #[must_use]
    pub fn packet_type(&self) -> Option<PacketType> {
        self.header.packet_type()
    }

    /// Get the raw packet type field
    #[must_use]
    pub const fn type_raw(&self) -> u16 {
        self.header.type_raw()
    }

    /// Get the 1-based packet index within its multipart message
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.header.index()
    }

    /// Get the total packet count of the multipart message
    #[must_use]
    pub const fn parts(&self) -> u32 {
        self.header.parts()
    }

    /// Get payload
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Check the header crc against the payload
    ///
    /// Decoding never verifies the crc; integrators that want integrity
    /// checking on reassembly opt in by calling this per packet.
    #[must_use]
    pub fn verify_crc(&self) -> bool {
        checksum::crc16(&self.payload) == self.header.crc()
    }

    /// Encode packet to wire bytes
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::encode(self)
    }

    /// Decode a packet from wire bytes
    pub fn decode(bytes: impl Into<Bytes>) -> super::Result<Self> {
        super::decode(bytes.into())
    }
}
