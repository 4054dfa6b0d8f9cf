//! Scalar vs batch decoding, unaligned bit runs and varints.
#![allow(missing_docs)] // criterion_group! generates undocumented pub fns
use colreader::{BinaryReader, BufferBinaryReader, ByteOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::distributions::{Distribution, Uniform};

fn random_page(n_bytes: usize) -> Vec<u8> {
    let dist = Uniform::from(0..=255_u8);
    let mut rng = rand::thread_rng();
    (0..n_bytes).map(|_| dist.sample(&mut rng)).collect()
}

/// n scalar calls vs one batch call over the same 1M int32s
fn scalar_vs_batch(c: &mut Criterion) {
    let n = 1_000_000;
    let page = random_page(4 * n);

    fn _dummy_scalar(page: &[u8], n: usize) -> Vec<i32> {
        let mut r = BufferBinaryReader::with_byte_order(page, ByteOrder::LittleEndian);
        (0..n).map(|_| r.read_int32().unwrap()).collect()
    }

    fn _dummy_batch(page: &[u8], n: usize) -> Vec<i32> {
        let mut r = BufferBinaryReader::with_byte_order(page, ByteOrder::LittleEndian);
        r.read_ints32(n).unwrap()
    }

    c.bench_function(
        &format!("read_int32 x {}", n),
        |b| b.iter(|| _dummy_scalar(black_box(&page), n))
    );
    c.bench_function(
        &format!("read_ints32({})", n),
        |b| b.iter(|| _dummy_batch(black_box(&page), n))
    );
}

/// bit runs starting off a byte boundary
fn unaligned_bits(c: &mut Criterion) {
    let page = random_page(1 << 16);

    fn _dummy_bits(page: &[u8], width: usize) -> usize {
        let mut r = BufferBinaryReader::new(page);
        r.seek_bits(3).unwrap();
        let mut ones = 0;
        while r.remaining_length().bits() >= width {
            ones += r.read_bits(width).unwrap().into_iter().filter(|b| *b == 1).count();
        }
        ones
    }

    for width in [1, 7, 13] {
        c.bench_function(
            &format!("read_bits({}) unaligned", width),
            |b| b.iter(|| _dummy_bits(black_box(&page), width))
        );
    }
}

fn varints(c: &mut Criterion) {
    // 300 as a varint, over and over
    let page: Vec<u8> = std::iter::repeat([0xAC_u8, 0x02]).take(100_000).flatten().collect();

    c.bench_function("read_var_int x 100000", |b| b.iter(|| {
        let mut r = BufferBinaryReader::new(black_box(&page[..]));
        let mut sum = 0;
        while !r.is_exhausted() {
            sum += r.read_var_int().unwrap();
        }
        sum
    }));
}

criterion_group!(benches, scalar_vs_batch, unaligned_bits, varints);
criterion_main!(benches);
