//! Decodes a synthetic page with the scalar and the batch paths and reports timings.
use std::time::Instant;
use colreader::{BinaryReader, BufferBinaryReader, ByteOrder, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(1_000_000) {
        error!("decoding failed: {e}");
        std::process::exit(1);
    }
}

fn run(n: usize) -> Result<()> {
    let page = synthetic_page(n);
    info!(bytes = page.len(), "built page");

    let now = Instant::now();
    let mut reader = BufferBinaryReader::with_byte_order(&page[..], ByteOrder::LittleEndian);
    let mut scalar_sum = 0_i64;
    for _ in 0..n {
        scalar_sum += reader.read_int64()?;
    }
    info!(elapsed = ?now.elapsed(), sum = scalar_sum, "read_int64 x {n}");

    let now = Instant::now();
    let mut reader = BufferBinaryReader::with_byte_order(&page[..], ByteOrder::LittleEndian);
    let batch_sum: i64 = reader.read_ints64(n)?.into_iter().sum();
    info!(elapsed = ?now.elapsed(), sum = batch_sum, "read_ints64({n})");

    let now = Instant::now();
    let mut reader = BufferBinaryReader::new(&page[..]);
    let set_bits = reader.read_bits(reader.remaining_length().bits())?.into_iter().filter(|b| *b == 1).count();
    info!(elapsed = ?now.elapsed(), set_bits, "read_bits over the whole page");

    Ok(())
}

fn synthetic_page(n: usize) -> Vec<u8> {
    (0..n as i64).flat_map(|x| (x * 7 - 3).to_le_bytes()).collect()
}
