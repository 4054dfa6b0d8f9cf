//! [`BinaryReader`] over a fully materialized in-memory buffer.
//!
//! The reader doesn't consume the buffer; it only moves a bit cursor through it.
//! Remaining length is always derived as `length - position`, so the two can't drift apart.
//!
//! # Example
//! ```rust
//! # use colreader::{BinaryReader, BufferBinaryReader, ByteOrder};
//! let page = [0x05, 0x00, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o', 0xAC, 0x02];
//! let mut reader = BufferBinaryReader::with_byte_order(&page[..], ByteOrder::LittleEndian);
//!
//! assert_eq!(reader.read_string().unwrap(), "hello");
//! assert_eq!(reader.position().bits(), 9 * 8);
//! assert_eq!(reader.read_var_int().unwrap(), 300);
//! assert!(reader.is_exhausted());
//! ```

use bitvec::prelude as bv;
use bitvec::view::BitView;
use itertools::Itertools;
use tracing::{debug, trace};
use crate::{
    binary_reader::BinaryReader,
    bit_position::BitPosition,
    byte_order::{ByteOrder, Scalar},
    bytes::ByteSequence,
    config::ReaderConfig,
    error::{ReaderError, Result},
};

/// a varint carrying 64 bits of payload needs at most this many bytes
const MAX_VARINT_BYTES: usize = 10;
/// width of the length prefix of strings and byte arrays
const LENGTH_PREFIX_BYTES: usize = 4;
const INT96_BYTES: usize = 12;

/// Reader over any byte buffer, borrowed (`&[u8]`) or owned (`Vec<u8>`).
///
/// One reader per page: the cursor is plain state mutated through `&mut self`,
/// so sharing a reader across threads needs external locking.
#[derive(Debug, Clone)]
pub struct BufferBinaryReader<B: AsRef<[u8]>> {
    buffer: B,
    byte_order: ByteOrder,
    position: BitPosition,
}

impl<B: AsRef<[u8]>> BufferBinaryReader<B> {
    /// little-endian reader at the start of `buffer`
    pub fn new(buffer: B) -> Self {
        Self::with_byte_order(buffer, ByteOrder::default())
    }

    /// reader at the start of `buffer` with the given byte order
    pub fn with_byte_order(buffer: B, byte_order: ByteOrder) -> Self {
        BufferBinaryReader { buffer, byte_order, position: BitPosition::default() }
    }

    /// reader at the start of `buffer`, set up from `config`
    pub fn with_config(buffer: B, config: &ReaderConfig) -> Self {
        Self::with_byte_order(buffer, config.byte_order)
    }

    /// the whole backing buffer, regardless of position
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// give the buffer back
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn remaining_bits(&self) -> usize {
        self.buffer().len() * 8 - self.position.bits()
    }

    /// fails unless `bits` more bits can be consumed
    fn ensure(&self, bits: usize) -> Result<()> {
        let remaining = self.remaining_bits();
        if bits > remaining {
            return Err(ReaderError::Exhausted { requested: bits, remaining });
        }
        Ok(())
    }

    /// All whole bytes still readable by the byte-sized operations,
    /// starting at the byte the cursor falls into.
    fn byte_window(&self) -> &[u8] {
        let start = self.position.byte_offset();
        let budget = self.remaining_bits() / 8;
        &self.buffer()[start..start + budget]
    }

    /// the next `n_bytes` bytes, without moving
    fn peek_bytes(&self, n_bytes: usize) -> Result<&[u8]> {
        let window = self.byte_window();
        window.get(..n_bytes).ok_or(ReaderError::Exhausted {
            requested: n_bytes.saturating_mul(8),
            remaining: self.remaining_bits(),
        })
    }

    fn read_scalar<T: Scalar>(&mut self) -> Result<T> {
        let value = self.byte_order.decode::<T>(self.peek_bytes(T::WIDTH)?);
        self.position.advance(T::WIDTH * 8);
        Ok(value)
    }

    /// `total` scalars in one go: pull `total * WIDTH` bytes, then cut them into chunks
    fn read_scalars<T: Scalar>(&mut self, total: usize) -> Result<Vec<T>> {
        let raw = self.read_bytes(total.saturating_mul(T::WIDTH))?;
        let order = self.byte_order;
        trace!(total, width = T::WIDTH, "batch decode");
        Ok(raw.chunks_exact(T::WIDTH).map(|chunk| order.decode::<T>(chunk)).collect_vec())
    }

    /// Walks up to `total` length-prefixed entries in the byte window.
    ///
    /// Returns the `(start, len)` of each body relative to the window, and the
    /// number of bytes they span. Nothing is consumed here.
    fn scan_length_prefixed(&self, total: usize) -> Result<(Vec<(usize, usize)>, usize)> {
        let window = self.byte_window();
        let mut entries = Vec::with_capacity(total.min(window.len() / LENGTH_PREFIX_BYTES));
        let mut pos = 0;

        while entries.len() < total {
            let Some(prefix) = window.get(pos..pos + LENGTH_PREFIX_BYTES) else {
                debug!(
                    read = entries.len(),
                    requested = total,
                    trailing_bytes = window.len() - pos,
                    "no room for another length prefix, stopping early"
                );
                break;
            };
            let declared: u32 = self.byte_order.decode(prefix);
            let body_start = pos + LENGTH_PREFIX_BYTES;
            let available = window.len() - body_start;
            let len = declared as usize;
            if len > available {
                debug!(declared, available, "length prefix runs past the buffer");
                return Err(ReaderError::MalformedLength { declared, remaining: available });
            }
            entries.push((body_start, len));
            pos = body_start + len;
        }
        Ok((entries, pos))
    }

    fn body_to_string(&self, start: usize, len: usize) -> Result<String> {
        let body = &self.byte_window()[start..start + len];
        String::from_utf8(body.to_vec())
            .map_err(|_| ReaderError::InvalidUtf8 { position: self.position.byte_offset() + start })
    }
}

impl<B: AsRef<[u8]>> BinaryReader for BufferBinaryReader<B> {
    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn length(&self) -> BitPosition {
        BitPosition::from_bytes(self.buffer().len())
    }

    fn position(&self) -> BitPosition {
        self.position
    }

    fn remaining_length(&self) -> BitPosition {
        BitPosition::new(self.remaining_bits())
    }

    fn read_bit(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let byte = self.buffer()[self.position.byte_offset()];
        let bit = (byte >> self.position.bit_offset()) & 1;
        self.position.advance(1);
        Ok(bit)
    }

    fn read_bits(&mut self, total: usize) -> Result<Vec<u8>> {
        self.ensure(total)?;
        let start = self.position.bits();
        // Lsb0: index i of a byte's view is `(byte >> i) & 1`, and the view runs on into the next byte
        let bits: &bv::BitSlice<u8, bv::Lsb0> = self.buffer().view_bits::<bv::Lsb0>();
        let decoded = bits[start..start + total].iter().by_vals().map(u8::from).collect_vec();
        self.position.advance(total);
        Ok(decoded)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = self.peek_bytes(1)?[0];
        self.position.advance(8);
        Ok(byte)
    }

    fn read_bytes(&mut self, total: usize) -> Result<ByteSequence> {
        let bytes = ByteSequence::from(self.peek_bytes(total)?);
        self.position.advance(total * 8);
        Ok(bytes)
    }

    fn read_int32(&mut self) -> Result<i32> {
        self.read_scalar()
    }

    fn read_ints32(&mut self, total: usize) -> Result<Vec<i32>> {
        self.read_scalars(total)
    }

    fn read_uint32(&mut self) -> Result<u32> {
        self.read_scalar()
    }

    fn read_uints32(&mut self, total: usize) -> Result<Vec<u32>> {
        self.read_scalars(total)
    }

    fn read_int64(&mut self) -> Result<i64> {
        self.read_scalar()
    }

    fn read_ints64(&mut self, total: usize) -> Result<Vec<i64>> {
        self.read_scalars(total)
    }

    fn read_uint64(&mut self) -> Result<u64> {
        self.read_scalar()
    }

    fn read_uints64(&mut self, total: usize) -> Result<Vec<u64>> {
        self.read_scalars(total)
    }

    fn read_int96(&mut self) -> Result<[u8; 12]> {
        let mut raw = [0_u8; INT96_BYTES];
        raw.copy_from_slice(self.peek_bytes(INT96_BYTES)?);
        self.position.advance(INT96_BYTES * 8);
        Ok(raw)
    }

    fn read_ints96(&mut self, total: usize) -> Result<Vec<[u8; 12]>> {
        let raw = self.read_bytes(total.saturating_mul(INT96_BYTES))?;
        trace!(total, width = INT96_BYTES, "batch decode");
        Ok(raw
            .chunks_exact(INT96_BYTES)
            .map(|chunk| {
                let mut value = [0_u8; INT96_BYTES];
                value.copy_from_slice(chunk);
                value
            })
            .collect_vec())
    }

    fn read_float(&mut self) -> Result<f32> {
        self.read_scalar()
    }

    fn read_floats(&mut self, total: usize) -> Result<Vec<f32>> {
        self.read_scalars(total)
    }

    fn read_double(&mut self) -> Result<f64> {
        self.read_scalar()
    }

    fn read_doubles(&mut self, total: usize) -> Result<Vec<f64>> {
        self.read_scalars(total)
    }

    fn read_var_int(&mut self) -> Result<u64> {
        let (value, n_bytes) = {
            let window = self.byte_window();
            let mut result = 0_u64;
            let mut done = None;
            for (i, &byte) in window.iter().take(MAX_VARINT_BYTES).enumerate() {
                // the last byte only has room for bit 63
                if i == MAX_VARINT_BYTES - 1 && byte > 0x01 {
                    return Err(ReaderError::VarIntOverflow { bytes: MAX_VARINT_BYTES });
                }
                result |= u64::from(byte & 0x7F) << (7 * i);
                if byte & 0x80 == 0 {
                    done = Some((result, i + 1));
                    break;
                }
            }
            match done {
                Some(decoded) => decoded,
                None => {
                    return Err(ReaderError::Exhausted {
                        requested: (window.len() + 1) * 8,
                        remaining: self.remaining_bits(),
                    })
                }
            }
        };
        self.position.advance(n_bytes * 8);
        Ok(value)
    }

    fn read_string(&mut self) -> Result<String> {
        let declared: u32 = self.byte_order.decode(self.peek_bytes(LENGTH_PREFIX_BYTES)?);
        let available = self.byte_window().len() - LENGTH_PREFIX_BYTES;
        let len = declared as usize;
        if len > available {
            debug!(declared, available, "length prefix runs past the buffer");
            return Err(ReaderError::MalformedLength { declared, remaining: available });
        }
        let s = self.body_to_string(LENGTH_PREFIX_BYTES, len)?;
        self.position.advance((LENGTH_PREFIX_BYTES + len) * 8);
        Ok(s)
    }

    fn read_byte_arrays(&mut self, total: usize) -> Result<Vec<ByteSequence>> {
        let (entries, consumed) = self.scan_length_prefixed(total)?;
        let window = self.byte_window();
        let arrays = entries
            .into_iter()
            .map(|(start, len)| ByteSequence::from(&window[start..start + len]))
            .collect_vec();
        self.position.advance(consumed * 8);
        Ok(arrays)
    }

    fn read_strings(&mut self, total: usize) -> Result<Vec<String>> {
        let (entries, consumed) = self.scan_length_prefixed(total)?;
        let strings: Vec<String> = entries
            .into_iter()
            .map(|(start, len)| self.body_to_string(start, len))
            .collect::<Result<_>>()?;
        self.position.advance(consumed * 8);
        Ok(strings)
    }

    fn seek_bits(&mut self, bits: usize) -> Result<()> {
        self.ensure(bits)?;
        self.position.advance(bits);
        Ok(())
    }

    fn seek_bytes(&mut self, bytes: usize) -> Result<()> {
        self.seek_bits(bytes.saturating_mul(8))
    }

    fn rewind_bits(&mut self, bits: usize) -> Result<()> {
        self.position.retreat(bits)
    }
}
