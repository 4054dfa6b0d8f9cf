//! Crate implementing the bit-addressable binary reader underneath a columnar file format decoder.
//!
//! Pages of a columnar file arrive as plain byte buffers. Before anything can be
//! interpreted against a schema, those bytes have to be turned into primitives:
//! bits (definition/repetition levels, bit-packed runs), varints (RLE headers),
//! fixed-width integers, floats, 96-bit timestamps and length-prefixed byte arrays.
//!
//! # Overview
//! A [`BufferBinaryReader`] wraps a buffer and a [`ByteOrder`] and keeps a single bit cursor.
//! Every decode call reads at the cursor and advances it by exactly the bits it consumed.
//! Remaining length is always `length - position`; when it hits zero, the page is done.
//!
//! # Note
//! * The reader doesn't consume the buffer, it borrows (or owns) it and just moves a cursor.
//!   After decoding one section, the caller can hand the rest of the page to something else
//!   via `&reader.buffer()[reader.position().byte_offset()..]`.
//! * Reading past the end is an error ([`ReaderError::Exhausted`]), never a silent zero.
//!   A failed read leaves the cursor untouched.
//! * The batch operations (`read_ints32(n)`, `read_doubles(n)`, ...) pull all `n * width` bytes
//!   in one go and then chunk them. They account bits exactly like `n` scalar calls would.
//! * `read_byte_arrays`/`read_strings` are tolerant: if fewer than 4 bytes remain for the
//!   next length prefix, they return what they have so far. A prefix that points past the end
//!   of the buffer is an error though.
//!
//! # Example
//! ```rust
//! use colreader::{BinaryReader, BufferBinaryReader, ByteOrder};
//!
//! let page: Vec<u8> = vec![
//!     0b0000_1101,             // 4 bits of levels, then padding
//!     0x96, 0x01,              // varint 150
//!     0x2A, 0x00, 0x00, 0x00,  // int32 42
//! ];
//! let mut reader = BufferBinaryReader::with_byte_order(page, ByteOrder::LittleEndian);
//!
//! assert_eq!(reader.read_bits(4).unwrap(), vec![1, 0, 1, 1]);
//! reader.seek_bits(4).unwrap();
//! assert_eq!(reader.read_var_int().unwrap(), 150);
//! assert_eq!(reader.read_int32().unwrap(), 42);
//! assert!(reader.is_exhausted());
//! ```
//!
//! # Bit layout
//! Within a byte, bits are numbered LSB-first: bit 0 is `byte & 1`.
//! A bit run continues from bit 7 of one byte into bit 0 of the next.
//! ```bash,no_run
//! byte 0     byte 1
//! 76543210   76543210
//! ^^--------------^^   read_bits(4) starting at bit 6
//! ```
//! The byte order only matters when several bytes are glued into one scalar;
//! varints have their own (little-endian) layout and ignore it.
//!
//! # Sizes
//! | op | bits consumed |
//! |----|---------------|
//! | `read_bit` / `read_bits(n)` | 1 / n |
//! | `read_byte` / `read_bytes(n)` | 8 / 8n |
//! | `read_int32`, `read_uint32`, `read_float` | 32 |
//! | `read_int64`, `read_uint64`, `read_double` | 64 |
//! | `read_int96` | 96 |
//! | `read_var_int` | 8 per byte of the varint |
//! | `read_string` | 32 + 8 * length |
#![deny(missing_docs)]
pub mod bit_position;
pub mod byte_order;
pub mod bytes;
pub mod error;
pub mod config;
pub mod binary_reader;
pub mod buffer_reader;

pub use bit_position::BitPosition;
pub use byte_order::{ByteOrder, Scalar};
pub use bytes::ByteSequence;
pub use error::{ReaderError, Result};
pub use config::ReaderConfig;
pub use binary_reader::BinaryReader;
pub use buffer_reader::BufferBinaryReader;
