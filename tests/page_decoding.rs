//! Decoding page-shaped buffers through the `BinaryReader` trait object.
use colreader::{BinaryReader, BufferBinaryReader, ByteOrder, ReaderConfig, ReaderError};
use pretty_assertions::assert_eq;

/// what a column decoder on top of the reader would do for a tiny page:
/// bit-packed levels, a varint run header, plain int64 values, then byte arrays
fn decode_page(reader: &mut dyn BinaryReader) -> Result<(Vec<bool>, u64, Vec<i64>, Vec<Vec<u8>>), ReaderError> {
    let levels = reader.read_booleans(5)?;
    // pad the levels to a byte boundary
    let pad = (8 - reader.position().bit_offset()) % 8;
    reader.seek_bits(pad)?;
    let run_header = reader.read_var_int()?;
    let values = reader.read_ints64(2)?;
    let arrays = reader.read_byte_arrays(10)?.into_iter().map(|b| b.into_vec()).collect();
    Ok((levels, run_header, values, arrays))
}

fn build_page(order: ByteOrder) -> Vec<u8> {
    let mut page = vec![0b0001_0110, 0xAC, 0x02];
    for v in [7_i64, -9] {
        match order {
            ByteOrder::LittleEndian => page.extend(v.to_le_bytes()),
            ByteOrder::BigEndian => page.extend(v.to_be_bytes()),
        }
    }
    for body in [&b"ab"[..], &b""[..], &b"xyz"[..]] {
        let len = body.len() as u32;
        match order {
            ByteOrder::LittleEndian => page.extend(len.to_le_bytes()),
            ByteOrder::BigEndian => page.extend(len.to_be_bytes()),
        }
        page.extend_from_slice(body);
    }
    // trailing padding, too short for another prefix
    page.extend([0, 0]);
    page
}

#[test]
fn test_decode_page_both_byte_orders() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let page = build_page(order);
        let mut reader = BufferBinaryReader::with_config(&page[..], &ReaderConfig::new(order));

        let (levels, run_header, values, arrays) = decode_page(&mut reader).unwrap();
        assert_eq!(levels, vec![false, true, true, false, true]);
        assert_eq!(run_header, 300);
        assert_eq!(values, vec![7, -9]);
        assert_eq!(arrays, vec![b"ab".to_vec(), vec![], b"xyz".to_vec()]);

        // everything but the padding was consumed
        assert_eq!(reader.remaining_length().bits(), 16);
        assert_eq!(reader.position().bits() + reader.remaining_length().bits(), reader.length().bits());
    }
}

#[test]
fn test_endianness_vectors() {
    let buf = [0x01, 0x00, 0x00, 0x00];
    let mut le_reader = BufferBinaryReader::with_byte_order(&buf[..], ByteOrder::LittleEndian);
    let mut be_reader = BufferBinaryReader::with_byte_order(&buf[..], ByteOrder::BigEndian);
    let le: &mut dyn BinaryReader = &mut le_reader;
    let be: &mut dyn BinaryReader = &mut be_reader;
    assert_eq!(le.read_int32().unwrap(), 1);
    assert_eq!(be.read_int32().unwrap(), 16_777_216);
}

#[test]
fn test_readers_are_independent() {
    // one reader per page; two readers over the same bytes don't see each other's cursor
    let page = build_page(ByteOrder::LittleEndian);
    let mut a = BufferBinaryReader::new(&page[..]);
    let mut b = BufferBinaryReader::new(&page[..]);
    a.seek_bytes(3).unwrap();
    assert_eq!(a.read_int64().unwrap(), 7);
    assert_eq!(b.position().bits(), 0);
    assert_eq!(b.read_byte().unwrap(), 0b0001_0110);
}

#[test]
fn test_exhaustion_is_distinct_from_zero() {
    let page = [0_u8; 4];
    let mut reader = BufferBinaryReader::new(&page[..]);
    assert_eq!(reader.read_int32().unwrap(), 0);
    assert!(reader.is_exhausted());
    assert_eq!(reader.read_int32(), Err(ReaderError::Exhausted { requested: 32, remaining: 0 }));
}

#[test]
fn test_error_messages() {
    let page = [0xFF, 0xFF, 0xFF, 0x7F];
    let mut reader = BufferBinaryReader::new(&page[..]);
    let err = reader.read_string().unwrap_err();
    assert_eq!(err.to_string(), "malformed length prefix: declared 2147483647 bytes, only 0 remaining");
}
