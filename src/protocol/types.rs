//! SPP packet types

use std::fmt;

/// SPP packet types
///
/// The core only produces [`PacketType::Data`]; the 2-byte wire field
/// leaves room for caller protocols to define further kinds. Unknown
/// values survive decoding as the raw `u16` on the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum PacketType {
    /// Ordinary payload-bearing packet
    Data = 0,
}

impl PacketType {
    /// Convert from the wire field value
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Data),
            _ => None,
        }
    }

    /// Convert to the wire field value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Data => "Data",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_type_roundtrip() {
        let byte = PacketType::Data.as_u16();
        assert_eq!(PacketType::from_u16(byte), Some(PacketType::Data));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert_eq!(PacketType::from_u16(0x7FFF), None);
    }
}
