//! Tests for ring geometry built from announced tokens.
//!
//! # Test Strategy
//!
//! 1. **Basic functionality**: Empty ring, single token, ranges in order
//! 2. **Ownership**: Every token owned by exactly one range
//! 3. **Scans**: Unwrapped ranges scanned with comparison bounds
//! 4. **All partitioners**: Same geometry for hashed and ordered tokens

use corelib::{
    ByteOrderedPartitioner, Murmur3Partitioner, Murmur3Token, Partitioner, RandomPartitioner,
    ScanBound, Token, TokenRing,
};

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_ring() {
    let ring = TokenRing::new(Murmur3Partitioner, Vec::new());
    assert!(ring.is_empty());
    assert_eq!(ring.token_count(), 0);
    assert!(ring.ranges().is_empty());
}

#[test]
fn test_ring_from_hashed_keys() {
    let p = Murmur3Partitioner;
    let keys: Vec<&[u8]> = vec![b"node1", b"node2", b"node3", b"node4"];
    let ring = TokenRing::new(p, keys.iter().map(|k| p.hash(k)));

    assert_eq!(ring.token_count(), 4);
    let ranges = ring.ranges();
    assert_eq!(ranges.len(), 4);

    // Consecutive ranges share bounds and the last one closes the ring.
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    assert_eq!(ranges[3].end(), ranges[0].start());
    assert_eq!(ranges.iter().filter(|r| r.is_wrapped_around()).count(), 1);
}

#[test]
fn test_ring_tokens_in_order() {
    let ring = TokenRing::new(Murmur3Partitioner, [30, -10, 20].map(Murmur3Token));
    let tokens: Vec<i64> = ring.tokens().map(|t| t.value()).collect();
    assert_eq!(tokens, vec![-10, 20, 30]);
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[test]
fn test_every_key_owned_once() {
    let p = Murmur3Partitioner;
    let ring = TokenRing::new(p, (0..8).map(|i| p.hash(format!("host-{}", i).as_bytes())));
    let ranges = ring.ranges();

    for i in 0..200 {
        let token = p.hash(format!("key-{}", i).as_bytes());
        let owners: Vec<_> = ranges.iter().filter(|r| r.contains(&token)).collect();
        assert_eq!(owners.len(), 1, "key-{} owned by {} ranges", i, owners.len());
        assert_eq!(ring.range_containing(&token).as_ref(), Some(owners[0]));
    }
}

#[test]
fn test_ranges_merge_back_into_full_ring() {
    let p = RandomPartitioner;
    let ring = TokenRing::new(p, ["a", "b", "c"].iter().map(|k| p.hash(k.as_bytes())));
    let mut ranges = ring.ranges().into_iter();
    let first = ranges.next().unwrap();
    let merged = ranges.try_fold(first, |acc, r| acc.merge_with(&r)).unwrap();
    assert!(merged.is_full_ring());
}

// ============================================================================
// Scan Tests
// ============================================================================

#[test]
fn test_unwrapped_ranges_scan_with_single_bound() {
    let p = Murmur3Partitioner;
    let ring = TokenRing::new(p, [-100, 0, 100].map(Murmur3Token));
    for range in ring.ranges() {
        for piece in range.unwrap() {
            let bounds = piece.scan_bounds();
            assert_eq!(bounds.len(), 1, "{} needs {:?}", piece, bounds);
        }
    }
    let wrapped = ring.range_containing(&Murmur3Token(500)).unwrap();
    assert_eq!(
        wrapped.scan_bounds(),
        vec![ScanBound::After(Murmur3Token(100)), ScanBound::AtMost(Murmur3Token(-100))]
    );
}

#[test]
fn test_scan_bounds_serialize_for_binding() {
    let p = Murmur3Partitioner;
    let ring = TokenRing::new(p, [-1, 1].map(Murmur3Token));
    let range = ring.range_containing(&Murmur3Token(0)).unwrap();
    match range.scan_bounds().as_slice() {
        [ScanBound::Between(start, end)] => {
            assert_eq!(start.serialize().as_ref(), &(-1i64).to_be_bytes());
            assert_eq!(end.serialize().as_ref(), &1i64.to_be_bytes());
        }
        other => panic!("unexpected bounds {:?}", other),
    }
}

// ============================================================================
// All Partitioners
// ============================================================================

#[test]
fn test_byte_ordered_ring() {
    let p = ByteOrderedPartitioner;
    let ring = TokenRing::new(p, ["g", "p", "x"].iter().map(|k| p.token_from_str(k).unwrap()));
    let owner = ring.range_containing(&p.hash(b"hello")).unwrap();
    assert_eq!(owner.to_string(), "(g, p]");
    let owner = ring.range_containing(&p.hash(b"zebra")).unwrap();
    assert_eq!(owner.to_string(), "(x, g]");
    assert!(owner.is_wrapped_around());
}
