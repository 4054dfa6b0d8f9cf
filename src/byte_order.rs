//! Byte order of multi-byte scalars.
//!
//! Only the reassembly of several bytes into one scalar depends on the byte order.
//! Bits *within* a byte are always addressed LSB-first (see [`crate::BinaryReader::read_bits`]).
//!
//! For `width` raw bytes `B[0..width)`:
//! * little-endian: `B[0] | B[1] << 8 | ... | B[width-1] << 8*(width-1)`
//! * big-endian:    `B[0] << 8*(width-1) | ... | B[width-1]`
//!
//! ```rust
//! # use colreader::ByteOrder;
//! let raw = [0x01, 0x00, 0x00, 0x00];
//! assert_eq!(ByteOrder::LittleEndian.decode::<i32>(&raw), 1);
//! assert_eq!(ByteOrder::BigEndian.decode::<i32>(&raw), 16_777_216);
//! ```

use serde::{Deserialize, Serialize};

/// Little- or big-endian. Little-endian is what columnar pages are written in, hence the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// least significant byte first
    #[default]
    LittleEndian,
    /// most significant byte first
    BigEndian,
}

/// A fixed-width scalar that can be rebuilt from its raw bytes.
pub trait Scalar: Copy {
    /// number of bytes in the encoding
    const WIDTH: usize;

    /// rebuild from exactly `WIDTH` little-endian bytes
    fn from_le_chunk(chunk: &[u8]) -> Self;

    /// rebuild from exactly `WIDTH` big-endian bytes
    fn from_be_chunk(chunk: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn from_le_chunk(chunk: &[u8]) -> Self {
                    let mut raw = [0_u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(chunk);
                    <$t>::from_le_bytes(raw)
                }

                fn from_be_chunk(chunk: &[u8]) -> Self {
                    let mut raw = [0_u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(chunk);
                    <$t>::from_be_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar!(i32, u32, i64, u64, f32, f64);

impl ByteOrder {
    /// Reassembles `chunk` (exactly `T::WIDTH` bytes) into a scalar.
    ///
    /// Signed results are two's complement of the full width, so `[0xFF; 4]` is `-1_i32`.
    ///
    /// # Panics
    /// if `chunk.len() != T::WIDTH`; the reader only ever hands in exact chunks.
    pub fn decode<T: Scalar>(&self, chunk: &[u8]) -> T {
        match self {
            ByteOrder::LittleEndian => T::from_le_chunk(chunk),
            ByteOrder::BigEndian => T::from_be_chunk(chunk),
        }
    }
}
