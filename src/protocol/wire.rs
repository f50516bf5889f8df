//! Fixed-width big-endian integer codec.
//!
//! Header fields are unsigned magnitudes stored most-significant byte
//! first in fields of a fixed byte width. Values wider than their field
//! are truncated to the low-order bits that fit.

/// Encode `value` as exactly `size` big-endian bytes.
///
/// Excess high-order bits are truncated when `value` does not fit in
/// `size` bytes. `size` must be at most 8.
#[must_use]
pub fn encode_uint(value: u64, size: usize) -> Vec<u8> {
    debug_assert!(size <= 8, "field width above 8 bytes");
    (0..size)
        .map(|i| (value >> (8 * (size - 1 - i))) as u8)
        .collect()
}

/// Decode big-endian bytes into an unsigned integer.
///
/// Left-shift accumulation: each byte shifts the running value up by 8
/// bits. Inputs wider than 8 bytes keep only the low-order 64 bits.
#[must_use]
pub fn decode_uint(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
