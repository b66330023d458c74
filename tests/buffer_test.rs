// Integration tests for the GrowableBuffer write API
// Tests cover: growth scenarios, content fidelity, error atomicity, hand-off

use std::io::Write;

use growbuf::{BufferConfig, BufferError, GrowableBuffer, GrowthPolicy};
use proptest::prelude::*;

// ============================================================================
// Growth Scenarios
// ============================================================================

#[test]
fn test_exact_fill_does_not_grow() {
    let mut buf = GrowableBuffer::with_capacity(4);

    buf.put_slice(&[1, 2, 3]).unwrap();
    assert_eq!((buf.position(), buf.capacity()), (3, 4));

    buf.write_byte(4).unwrap();
    assert_eq!((buf.position(), buf.capacity()), (4, 4));
    assert_eq!(buf.reallocations(), 0, "Filling exactly must not grow");

    buf.write_byte(5).unwrap();
    assert_eq!((buf.position(), buf.capacity()), (5, 5));
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_single_large_write_into_empty_buffer() {
    let src: Vec<u8> = (100..110).collect();
    let mut buf = GrowableBuffer::new();

    buf.write_slice(&src, 0, src.len()).unwrap();

    assert_eq!(buf.position(), 10);
    assert_eq!(buf.capacity(), 10);
    assert_eq!(buf.reallocations(), 1);
    assert_eq!(buf.as_slice(), &src[..]);
}

#[test]
fn test_zero_length_write_changes_nothing() {
    let mut buf = GrowableBuffer::with_capacity(3);
    buf.put_slice(&[1, 2, 3]).unwrap();

    buf.write_slice(&[10, 11, 12, 13, 14], 2, 0).unwrap();

    assert_eq!(buf.position(), 3);
    assert_eq!(buf.capacity(), 3);
    assert_eq!(buf.reallocations(), 0);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_byte_at_a_time_grows_logarithmically() {
    for initial in [0, 1] {
        let n = 100_000;
        let mut buf = GrowableBuffer::with_capacity(initial);
        for i in 0..n {
            buf.write_byte(i as u8).unwrap();
        }

        assert_eq!(buf.position(), n);
        assert!(
            buf.reallocations() < 200,
            "Expected O(log n) reallocations, got {}",
            buf.reallocations()
        );
    }
}

#[test]
fn test_reallocations_scale_with_log_of_size() {
    let count = |n: usize| {
        let mut buf = GrowableBuffer::with_capacity(1);
        for _ in 0..n {
            buf.write_byte(0).unwrap();
        }
        buf.reallocations()
    };

    let small = count(10_000);
    let large = count(1_000_000);

    // 100x more bytes costs about log_1.1(100) ~ 48 more reallocations
    assert!(large > small);
    assert!(large - small < 60, "small={} large={}", small, large);
}

#[test]
fn test_config_growth_factor_applies() {
    let config = BufferConfig::new(8, 2.0).unwrap();
    let mut buf = GrowableBuffer::with_config(config).unwrap();

    buf.put_slice(&[0u8; 9]).unwrap();
    assert_eq!(buf.capacity(), 17, "Large write wins over doubling");

    buf.put_slice(&[0u8; 9]).unwrap();
    assert_eq!(buf.capacity(), 34, "Small write doubles");
}

// ============================================================================
// Pre-loaded Regions
// ============================================================================

#[test]
fn test_continue_after_existing_prefix() {
    let mut region = vec![0u8; 6];
    region[..4].copy_from_slice(&[0, 0, 0, 3]);

    let mut buf = GrowableBuffer::from_region(region, 4).unwrap();
    buf.put_slice(b"abc").unwrap();

    assert_eq!(buf.as_slice(), &[0, 0, 0, 3, b'a', b'b', b'c']);
    assert_eq!(buf.initial_capacity(), 6);
}

#[test]
fn test_boxed_region() {
    let region: Box<[u8]> = vec![1u8, 2, 3, 4].into_boxed_slice();
    let buf = GrowableBuffer::from_region(region, 2).unwrap();
    assert_eq!(buf.as_slice(), &[1, 2]);
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_position_past_region_rejected() {
    assert!(matches!(
        GrowableBuffer::from_region(Vec::new(), 1),
        Err(BufferError::InvalidPosition {
            position: 1,
            capacity: 0
        })
    ));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_invalid_range_has_no_effect() {
    let mut buf = GrowableBuffer::with_capacity(1);
    buf.write_byte(42).unwrap();

    for (offset, len) in [(0, 6), (5, 1), (6, 0), (usize::MAX, 1)] {
        let result = buf.write_slice(&[1, 2, 3, 4, 5], offset, len);
        assert!(
            matches!(result, Err(BufferError::InvalidRange { .. })),
            "offset={} len={} should be rejected",
            offset,
            len
        );
    }

    assert_eq!(buf.as_slice(), &[42]);
    assert_eq!(buf.capacity(), 1);
    assert_eq!(buf.reallocations(), 0);
}

#[test]
fn test_io_write() {
    let mut buf = GrowableBuffer::new();
    let n = buf.write(b"payload").unwrap();
    assert_eq!(n, 7);
    buf.write_all(b"!").unwrap();
    assert_eq!(buf.as_slice(), b"payload!");
}

// ============================================================================
// Hand-off
// ============================================================================

#[test]
fn test_into_parts_reports_valid_length() {
    let mut buf = GrowableBuffer::with_capacity(16);
    buf.put_slice(b"abc").unwrap();

    let (region, len) = buf.into_parts();
    assert_eq!(region.len(), 16);
    assert_eq!(len, 3);
    assert_eq!(&region[..len], b"abc");
}

#[test]
fn test_into_bytes_and_vec() {
    let mut buf = GrowableBuffer::with_capacity(2);
    buf.put_slice(b"batch").unwrap();
    let copy = buf.to_vec();

    assert_eq!(copy, b"batch");
    assert_eq!(buf.into_bytes(), bytes::Bytes::from_static(b"batch"));
}

#[test]
fn test_written_range_indexes_region() {
    let mut buf = GrowableBuffer::with_capacity(1);
    buf.put_slice(b"head").unwrap();
    let head = buf.written_range();
    buf.put_slice(b"tail").unwrap();

    let (region, _) = buf.into_parts();
    assert_eq!(&region[head], b"head");
}

#[test]
fn test_policy_default_matches_constant() {
    assert_eq!(
        GrowthPolicy::default().factor(),
        growbuf::DEFAULT_GROWTH_FACTOR
    );
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Byte(u8),
    Slice(Vec<u8>, usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Byte),
        prop::collection::vec(any::<u8>(), 0..64).prop_flat_map(|src| {
            let n = src.len();
            (0..=n).prop_flat_map(move |offset| {
                let src = src.clone();
                (0..=n - offset).prop_map(move |len| Op::Slice(src.clone(), offset, len))
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_contents_equal_concatenation(
        initial in 0usize..16,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut buf = GrowableBuffer::with_capacity(initial);
        let mut expected = Vec::new();

        for op in ops {
            let before = buf.to_vec();
            match op {
                Op::Byte(b) => {
                    buf.write_byte(b).unwrap();
                    expected.push(b);
                }
                Op::Slice(src, offset, len) => {
                    buf.write_slice(&src, offset, len).unwrap();
                    expected.extend_from_slice(&src[offset..offset + len]);
                }
            }

            prop_assert!(buf.position() <= buf.capacity());
            prop_assert_eq!(&buf.as_slice()[..before.len()], &before[..]);
        }

        prop_assert_eq!(buf.as_slice(), &expected[..]);
    }

    #[test]
    fn prop_zero_length_is_noop(
        prefix in prop::collection::vec(any::<u8>(), 0..32),
        src in prop::collection::vec(any::<u8>(), 0..32),
        offset_seed in any::<usize>(),
    ) {
        let offset = offset_seed % (src.len() + 1);
        let mut buf = GrowableBuffer::new();
        buf.put_slice(&prefix).unwrap();
        let (position, capacity) = (buf.position(), buf.capacity());

        buf.write_slice(&src, offset, 0).unwrap();

        prop_assert_eq!(buf.position(), position);
        prop_assert_eq!(buf.capacity(), capacity);
        prop_assert_eq!(buf.as_slice(), &prefix[..]);
    }
}
