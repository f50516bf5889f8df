//! Payload slicing
//!
//! Partitions an arbitrary-length byte buffer into ordered, size-bounded
//! slices, each paired with its CRC16. Slicing shares the source buffer;
//! no payload bytes are copied.

use bytes::Bytes;

use super::checksum;

/// One contiguous chunk of a source buffer, sized to fit a packet payload
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    data: Bytes,
    crc: u16,
}

impl Slice {
    /// Get the slice bytes
    #[must_use]
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the CRC16 of the slice bytes
    #[must_use]
    pub const fn crc(&self) -> u16 {
        self.crc
    }

    /// Split the slice into its bytes and checksum
    #[must_use]
    pub fn into_parts(self) -> (Bytes, u16) {
        (self.data, self.crc)
    }
}

/// Partition `data` into checksummed slices of at most `slice_size` bytes
///
/// Produces `ceil(data.len() / slice_size)` slices in source order. Every
/// slice except possibly the last holds exactly `slice_size` bytes; the
/// last holds the remainder. Empty input yields no slices.
///
/// # Panics
///
/// Panics if `slice_size` is zero.
#[must_use]
pub fn slice(data: &Bytes, slice_size: usize) -> Vec<Slice> {
    assert!(slice_size > 0, "slice size must be non-zero");

    let count = data.len().div_ceil(slice_size);
    (0..count)
        .map(|i| {
            let start = i * slice_size;
            let end = usize::min(start + slice_size, data.len());
            let chunk = data.slice(start..end);
            Slice {
                crc: checksum::crc16(&chunk),
                data: chunk,
            }
        })
        .collect()
}
