//! Record batch serialization example.
//!
//! Encodes a batch of length-prefixed key/value records into a buffer that
//! was sized for only a few of them, then hands the bytes off as one block.
//!
//! Run with:
//!     cargo run --example record_batch

use growbuf::{BufferConfig, BufferError, GrowableBuffer};

struct Record<'a> {
    offset: u64,
    key: &'a [u8],
    value: &'a [u8],
}

fn encode(buf: &mut GrowableBuffer, record: &Record<'_>) -> Result<(), BufferError> {
    let size = 8 + 4 + record.key.len() + 4 + record.value.len();
    buf.ensure_remaining(4 + size)?;

    buf.put_slice(&(size as u32).to_be_bytes())?;
    buf.put_slice(&record.offset.to_be_bytes())?;
    buf.put_slice(&(record.key.len() as u32).to_be_bytes())?;
    buf.put_slice(record.key)?;
    buf.put_slice(&(record.value.len() as u32).to_be_bytes())?;
    buf.put_slice(record.value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let values: Vec<String> = (0..100).map(|i| format!("payload-{}", i)).collect();
    let records: Vec<Record<'_>> = values
        .iter()
        .enumerate()
        .map(|(i, value)| Record {
            offset: i as u64,
            key: b"sensor",
            value: value.as_bytes(),
        })
        .collect();

    // Space for roughly five records
    let config = BufferConfig::default().with_initial_capacity(200);
    let mut buf = GrowableBuffer::with_config(config)?;

    // Batch header: record count, written up front
    buf.put_slice(&(records.len() as u32).to_be_bytes())?;
    for record in &records {
        encode(&mut buf, record)?;
    }

    println!(
        "Encoded {} records: {} bytes, capacity {} (started at {}), {} reallocations",
        records.len(),
        buf.position(),
        buf.capacity(),
        buf.initial_capacity(),
        buf.reallocations()
    );

    // Hand off to whatever sink comes next
    let batch = buf.into_bytes();
    println!("First 16 bytes: {:02x?}", &batch[..16]);

    Ok(())
}
