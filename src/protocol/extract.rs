//! Typed field extraction from payload buffers
//!
//! A reassembled payload is an opaque byte buffer until the consumer
//! protocol reads its fields back out. [`extract`] bounds-checks a
//! caller-supplied offset/size window and delegates the byte
//! interpretation to the target type's [`FieldDecode`] implementation.

use super::{Error, Result, wire};

/// Capability to decode a typed value from a field's raw bytes
///
/// Implemented for the five field shapes consumer schemas use: signed
/// integers, strings, boolean flag arrays, 64-bit integers, and the
/// decimal-scaled 4-byte float.
pub trait FieldDecode: Sized {
    /// Decode a value from the exact bytes of one field
    fn decode_field(bytes: &[u8]) -> Result<Self>;
}

/// Extract a typed field from `payload` at `offset`, spanning `size` bytes
///
/// # Errors
///
/// Returns [`Error::FieldOutOfRange`] when `offset + size` exceeds the
/// payload length, and whatever error the target type's decoder raises
/// for malformed field bytes.
pub fn extract<T: FieldDecode>(payload: &[u8], offset: usize, size: usize) -> Result<T> {
    let out_of_range = Error::FieldOutOfRange {
        offset,
        size,
        len: payload.len(),
    };
    let end = offset.checked_add(size).ok_or(out_of_range.clone())?;
    if end > payload.len() {
        return Err(out_of_range);
    }

    T::decode_field(&payload[offset..end])
}

/// Big-endian unsigned accumulation into a signed 32-bit container.
impl FieldDecode for i32 {
    fn decode_field(bytes: &[u8]) -> Result<Self> {
        Ok(wire::decode_uint(bytes) as Self)
    }
}

/// Big-endian unsigned accumulation into a signed 64-bit container.
impl FieldDecode for i64 {
    fn decode_field(bytes: &[u8]) -> Result<Self> {
        Ok(wire::decode_uint(bytes) as Self)
    }
}

/// Plain byte-to-character mapping; no encoding validation.
impl FieldDecode for String {
    fn decode_field(bytes: &[u8]) -> Result<Self> {
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// One byte expanded into 8 boolean flags.
///
/// Flag 0 corresponds to the least-significant bit of the byte.
impl FieldDecode for [bool; 8] {
    fn decode_field(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 1 {
            return Err(Error::FieldWidth {
                expected: 1,
                got: bytes.len(),
            });
        }

        let byte = bytes[0];
        let mut flags = [false; 8];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = (byte >> i) & 1 == 1;
        }
        Ok(flags)
    }
}

/// Decimal-scaled 4-byte float.
///
/// Bytes 0-2 form an unsigned big-endian significand. The high nibble of
/// byte 3 is the exponent magnitude; its least-significant bit is the
/// sign flag (even byte = positive exponent). The result is
/// `significand * 10^(±exponent)`. This is not IEEE-754 and must not be
/// replaced with a standard float32 decode; the decimal scaling is the
/// wire contract. A buffer of any width other than 4 decodes to `0.0`.
impl FieldDecode for f32 {
    #[allow(clippy::cast_precision_loss)]
    fn decode_field(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 4 {
            return Ok(0.0);
        }

        let significand = wire::decode_uint(&bytes[0..3]) as Self;
        let magnitude = i32::from(bytes[3] >> 4);
        let exponent = if bytes[3] & 1 == 0 {
            magnitude
        } else {
            -magnitude
        };
        Ok(significand * 10f32.powi(exponent))
    }
}
