//! The decoding contract shared by all readers.
//!
//! Every `read_*` call starts at the current [`BinaryReader::position`], advances it by
//! exactly the number of bits consumed and lowers [`BinaryReader::remaining_length`] by
//! the same amount. Reads that would run past the end fail with
//! [`crate::ReaderError::Exhausted`] and leave the reader where it was.
//!
//! Byte-sized reads (`read_byte`, `read_bytes`, integers, floats, strings) address the
//! byte the position falls into and ignore any pending sub-byte offset; only the bit
//! reads look at [`crate::BitPosition::bit_offset`].

use crate::{bit_position::BitPosition, byte_order::ByteOrder, bytes::ByteSequence, error::Result};

/// Positioned bit/byte decoding over some backing buffer.
pub trait BinaryReader {
    /// byte order used for multi-byte scalars and length prefixes
    fn byte_order(&self) -> ByteOrder;

    /// total size of the buffer, fixed at construction
    fn length(&self) -> BitPosition;

    /// current cursor
    fn position(&self) -> BitPosition;

    /// bits between the cursor and the end of the buffer (`length - position`)
    fn remaining_length(&self) -> BitPosition;

    /// true once every bit has been consumed
    fn is_exhausted(&self) -> bool {
        self.remaining_length().bits() == 0
    }

    /// A single bit, LSB-first within the current byte. Returns 0 or 1.
    fn read_bit(&mut self) -> Result<u8>;

    /// `total` consecutive bits (each 0 or 1), crossing byte boundaries as needed.
    ///
    /// Bits are taken LSB-first within each byte, starting at the current sub-byte
    /// offset, so reading 4 bits at offset 6 of `[0b1100_0000, 0b0000_0011]` gives `[1,1,1,1]`.
    fn read_bits(&mut self, total: usize) -> Result<Vec<u8>>;

    /// [`BinaryReader::read_bit`] as a bool
    fn read_boolean(&mut self) -> Result<bool> {
        Ok(self.read_bit()? == 1)
    }

    /// [`BinaryReader::read_bits`] as bools
    fn read_booleans(&mut self, total: usize) -> Result<Vec<bool>> {
        Ok(self.read_bits(total)?.into_iter().map(|b| b == 1).collect())
    }

    /// one unsigned byte
    fn read_byte(&mut self) -> Result<u8>;

    /// `total` raw bytes
    fn read_bytes(&mut self, total: usize) -> Result<ByteSequence>;

    /// 4-byte signed integer
    fn read_int32(&mut self) -> Result<i32>;

    /// `total` 4-byte signed integers
    fn read_ints32(&mut self, total: usize) -> Result<Vec<i32>>;

    /// 4-byte unsigned integer
    fn read_uint32(&mut self) -> Result<u32>;

    /// `total` 4-byte unsigned integers
    fn read_uints32(&mut self, total: usize) -> Result<Vec<u32>>;

    /// 8-byte signed integer
    fn read_int64(&mut self) -> Result<i64>;

    /// `total` 8-byte signed integers
    fn read_ints64(&mut self, total: usize) -> Result<Vec<i64>>;

    /// 8-byte unsigned integer
    fn read_uint64(&mut self) -> Result<u64>;

    /// `total` 8-byte unsigned integers
    fn read_uints64(&mut self, total: usize) -> Result<Vec<u64>>;

    /// 96-bit value as its 12 raw bytes, in buffer order; interpretation is up to the caller
    fn read_int96(&mut self) -> Result<[u8; 12]>;

    /// `total` 96-bit values
    fn read_ints96(&mut self, total: usize) -> Result<Vec<[u8; 12]>>;

    /// IEEE-754 single precision
    fn read_float(&mut self) -> Result<f32>;

    /// `total` single precision floats
    fn read_floats(&mut self, total: usize) -> Result<Vec<f32>>;

    /// IEEE-754 double precision
    fn read_double(&mut self) -> Result<f64>;

    /// `total` doubles
    fn read_doubles(&mut self, total: usize) -> Result<Vec<f64>>;

    /// Base-128 varint (7 payload bits per byte, low group first, high bit = continue).
    /// Independent of [`BinaryReader::byte_order`].
    fn read_var_int(&mut self) -> Result<u64>;

    /// 4-byte unsigned length followed by that many bytes of UTF-8.
    ///
    /// Bodies that are not UTF-8 fail with [`crate::ReaderError::InvalidUtf8`];
    /// use [`BinaryReader::read_byte_arrays`] for raw bytes.
    fn read_string(&mut self) -> Result<String>;

    /// Up to `total` length-prefixed byte arrays.
    ///
    /// Stops early, without error, when fewer than 4 bytes are left for the next prefix.
    fn read_byte_arrays(&mut self, total: usize) -> Result<Vec<ByteSequence>>;

    /// Up to `total` length-prefixed strings, same early stop as [`BinaryReader::read_byte_arrays`].
    ///
    /// A single entry that is not UTF-8 fails the whole batch and nothing is consumed.
    fn read_strings(&mut self, total: usize) -> Result<Vec<String>>;

    /// skip `bits` without decoding them
    fn seek_bits(&mut self, bits: usize) -> Result<()>;

    /// skip `bytes` whole bytes
    fn seek_bytes(&mut self, bytes: usize) -> Result<()>;

    /// move the cursor back by `bits`
    fn rewind_bits(&mut self, bits: usize) -> Result<()>;
}
