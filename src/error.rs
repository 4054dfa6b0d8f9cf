//! Error types for decoding from a [`crate::BinaryReader`].

use thiserror::Error;

/// Everything that can go wrong while decoding.
///
/// A failed read never moves the reader: after an `Err`, position and
/// remaining length are what they were before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReaderError {
    /// Not enough data left for the requested read.
    #[error("buffer exhausted: requested {requested} bits, only {remaining} remaining")]
    Exhausted {
        /// bits the operation needed
        requested: usize,
        /// bits left in the buffer
        remaining: usize,
    },

    /// A length prefix points past the end of the buffer.
    #[error("malformed length prefix: declared {declared} bytes, only {remaining} remaining")]
    MalformedLength {
        /// the length the prefix claims
        declared: u32,
        /// bytes left after the prefix
        remaining: usize,
    },

    /// A varint kept its continuation bit set past 64 bits of payload.
    #[error("varint does not terminate within {bytes} bytes")]
    VarIntOverflow {
        /// bytes inspected before giving up
        bytes: usize,
    },

    /// A length-prefixed string is not valid UTF-8.
    #[error("string at byte {position} is not valid utf-8")]
    InvalidUtf8 {
        /// byte offset of the first byte of the string body
        position: usize,
    },

    /// A position was moved below zero.
    #[error("cannot retreat {requested} bits from position {position}")]
    PositionUnderflow {
        /// position before the move
        position: usize,
        /// bits the caller tried to move back
        requested: usize,
    },
}

/// Result alias for all reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;
