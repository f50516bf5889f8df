//! CRC16 checksum over payload slices.
//!
//! SPP pins the variant to CRC-16/CCITT-FALSE: polynomial 0x1021, initial
//! value 0xFFFF, no input/output reflection, no final XOR. Both ends of a
//! deployment must agree on the variant for the `crc` header field to be
//! comparable, so the choice is part of the wire contract.

/// Generator polynomial (CRC-16/CCITT-FALSE).
const POLYNOMIAL: u16 = 0x1021;

/// Initial register value (CRC-16/CCITT-FALSE).
const INITIAL: u16 = 0xFFFF;

/// Compute the CRC16 of a byte sequence.
///
/// Pure and deterministic: identical inputs always produce identical
/// checksums.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        // CRC-16/CCITT-FALSE of "123456789" is 0x29B1
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc16(&[]), INITIAL);
    }

    #[test]
    fn test_deterministic() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(crc16(&data), crc16(&data));
    }

    #[test]
    fn test_differing_inputs_differ() {
        assert_ne!(crc16(&[0x00, 0x01]), crc16(&[0x01, 0x00]));
        assert_ne!(crc16(b"hello"), crc16(b"world"));
    }
}
