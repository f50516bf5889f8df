//! SPP error types

use thiserror::Error;

/// SPP protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw bytes are shorter than the fixed packet header
    #[error("buffer too short for packet header: need {needed} bytes, got {got}")]
    HeaderTooShort {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Field extraction reads past the end of the payload
    #[error("field out of range: offset {offset} + size {size} exceeds payload length {len}")]
    FieldOutOfRange {
        /// Field offset into the payload
        offset: usize,
        /// Field size in bytes
        size: usize,
        /// Payload length
        len: usize,
    },

    /// Field bytes have a width the target type cannot decode
    #[error("unexpected field width: expected {expected} bytes, got {got}")]
    FieldWidth {
        /// Width the target type requires
        expected: usize,
        /// Actual width handed to the decoder
        got: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
