#![no_main]

use libfuzzer_sys::fuzz_target;
use growbuf::{BufferError, GrowableBuffer};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the starting capacity
    let mut buf = GrowableBuffer::with_capacity(data[0] as usize % 17);
    let mut expected = Vec::new();
    let mut rest = &data[1..];

    while let Some((&op, tail)) = rest.split_first() {
        rest = tail;
        match op % 3 {
            0 => {
                let byte = op.wrapping_mul(31);
                buf.write_byte(byte).unwrap();
                expected.push(byte);
            }
            1 => {
                // Offset and length taken from the next two bytes
                let offset = tail.first().copied().unwrap_or(0) as usize;
                let len = tail.get(1).copied().unwrap_or(0) as usize;
                let before = (buf.position(), buf.capacity());

                match buf.write_slice(tail, offset, len) {
                    Ok(()) => expected.extend_from_slice(&tail[offset..offset + len]),
                    Err(BufferError::InvalidRange { .. }) => {
                        // Verify: rejected ranges leave no trace
                        assert_eq!((buf.position(), buf.capacity()), before);
                    }
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
            _ => {
                let additional = op as usize;
                buf.ensure_remaining(additional).unwrap();
                assert!(buf.remaining() >= additional);
            }
        }

        // Verify: cursor never passes the region
        assert!(buf.position() <= buf.capacity());
    }

    // Verify: contents are the concatenation of every write
    assert_eq!(buf.as_slice(), &expected[..]);
    assert_eq!(buf.into_vec(), expected);
});
