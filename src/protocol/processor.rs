//! Prepare/combine orchestration
//!
//! `prepare` turns an outbound payload into an ordered multipart packet
//! list; `combine` concatenates inbound packet payloads and hands the
//! result to a caller-supplied parser.

use std::fmt;

use bytes::Bytes;
use tracing::warn;

use super::{DEFAULT_SLICE_SIZE, Packet, PacketHeader, PacketType, slicer};

/// Build an ordered packet list from an outbound payload
///
/// Slices `data` at the default size of [`DEFAULT_SLICE_SIZE`] bytes.
/// See [`prepare_with_size`].
pub fn prepare(process_id: u16, data: impl Into<Bytes>) -> Vec<Packet> {
    prepare_with_size(process_id, data, DEFAULT_SLICE_SIZE)
}

/// Build an ordered packet list from an outbound payload
///
/// Every slice becomes one `Data` packet carrying the slice's CRC16, its
/// 1-based position as `index`, and the total slice count as `parts`.
/// The returned list preserves slice order; packets are never re-sorted
/// by `index` afterwards. An empty payload yields an empty list.
///
/// # Panics
///
/// Panics if `slice_size` is zero.
pub fn prepare_with_size(
    process_id: u16,
    data: impl Into<Bytes>,
    slice_size: usize,
) -> Vec<Packet> {
    let data = data.into();
    let slices = slicer::slice(&data, slice_size);
    let parts = slices.len() as u32;

    slices
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let (payload, crc) = s.into_parts();
            let header =
                PacketHeader::new(process_id, crc, PacketType::Data, i as u32 + 1, parts);
            Packet::from_parts(header, payload)
        })
        .collect()
}

/// Reassemble a typed value from an ordered packet list
///
/// Concatenates every payload in the list's given order and applies
/// `parse` to the combined buffer. Supplying packets in correct `index`
/// order is the caller's responsibility; no re-sorting, crc checking, or
/// `parts` consistency checking happens here.
///
/// A parse failure is recovered locally: the error is emitted as a
/// `tracing` warning and `None` is returned.
pub fn combine<T, E, F>(packets: &[Packet], parse: F) -> Option<T>
where
    F: FnOnce(&[u8]) -> Result<T, E>,
    E: fmt::Display,
{
    let total: usize = packets.iter().map(|p| p.payload().len()).sum();
    let mut data = Vec::with_capacity(total);
    for packet in packets {
        data.extend_from_slice(packet.payload());
    }

    match parse(&data) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, packets = packets.len(), "combined payload parse failed");
            None
        }
    }
}
