//! Bit-granular offsets into a byte buffer.
//!
//! A [`BitPosition`] is just a count of bits. It knows how to split itself
//! into a whole-byte part and a sub-byte part:
//! ```rust
//! # use colreader::BitPosition;
//! let mut p = BitPosition::new(0);
//! p.advance(13);
//! assert_eq!(p.byte_offset(), 1);
//! assert_eq!(p.bit_offset(), 5);
//! ```

use std::fmt;
use crate::error::{ReaderError, Result};

/// A non-negative number of bits, used both for cursor positions and for lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition(usize);

impl BitPosition {
    /// position `bits` bits into a buffer
    pub fn new(bits: usize) -> Self {
        BitPosition(bits)
    }

    /// position at the start of byte `bytes`
    pub fn from_bytes(bytes: usize) -> Self {
        BitPosition(bytes * 8)
    }

    /// the raw number of bits
    pub fn bits(&self) -> usize {
        self.0
    }

    /// index of the byte this position falls into (`bits / 8`)
    pub fn byte_offset(&self) -> usize {
        self.0 / 8
    }

    /// offset within that byte, in `[0, 8)`
    pub fn bit_offset(&self) -> usize {
        self.0 % 8
    }

    /// Moves forward by `n` bits.
    ///
    /// Unchecked against any buffer: the reader owning this position is the one
    /// that knows how much data there is.
    pub fn advance(&mut self, n: usize) {
        self.0 += n;
    }

    /// Moves back by `n` bits. Fails (leaving the position unchanged) instead of going below zero.
    pub fn retreat(&mut self, n: usize) -> Result<()> {
        match self.0.checked_sub(n) {
            Some(bits) => {
                self.0 = bits;
                Ok(())
            }
            None => Err(ReaderError::PositionUnderflow { position: self.0, requested: n }),
        }
    }
}

impl From<usize> for BitPosition {
    fn from(bits: usize) -> Self {
        BitPosition(bits)
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits ({} bytes + {} bits)", self.0, self.byte_offset(), self.bit_offset())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_byte_bit_decomposition() {
        for bits in 0..100 {
            let p = BitPosition::new(bits);
            assert!(p.bit_offset() < 8);
            assert_eq!(p.byte_offset() * 8 + p.bit_offset(), bits);
        }
    }

    #[test]
    fn test_advance_retreat() {
        let mut p = BitPosition::from_bytes(2);
        assert_eq!(p.bits(), 16);
        p.advance(3);
        assert_eq!((p.byte_offset(), p.bit_offset()), (2, 3));
        p.retreat(11).unwrap();
        assert_eq!(p, BitPosition::new(8));
    }

    #[test]
    fn test_retreat_below_zero() {
        let mut p = BitPosition::new(4);
        let err = p.retreat(5).unwrap_err();
        assert_eq!(err, ReaderError::PositionUnderflow { position: 4, requested: 5 });
        // untouched
        assert_eq!(p.bits(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(BitPosition::new(19).to_string(), "19 bits (2 bytes + 3 bits)");
    }
}
