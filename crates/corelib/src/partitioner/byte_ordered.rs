//! Byte-ordered partitioner implementation.
//!
//! Keys are their own tokens, so the ring preserves key order. Splitting needs
//! integers: both bounds are read as unsigned big-endian numbers, right-padded
//! with zero bytes to a common width (`0x0A` and `0x0BCD` become `0x0A00` and
//! `0x0BCD`). When that width leaves fewer positions than requested splits, up
//! to [`MAX_ADDED_BYTES`] more bytes of precision are added. Past that cap the
//! split degenerates into repeated boundaries instead of failing.
//!
//! Split points are written back at the working width, so leading zero bytes
//! survive: `0x0016` stays between `0x0010` and `0x0020`.

use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::One;
use tracing::debug;

use crate::error::Result;
use crate::partitioner::split::{check_split_request, split_range, RingBounds};
use crate::partitioner::traits::Partitioner;
use crate::token::byte_ordered::ByteOrderedToken;

/// Extra bytes of precision a split may add to fit the requested count.
pub const MAX_ADDED_BYTES: usize = 4;

/// Byte-ordered partitioner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteOrderedPartitioner;

impl Partitioner for ByteOrderedPartitioner {
    type TokenType = ByteOrderedToken;

    fn name(&self) -> &'static str {
        "ByteOrderedPartitioner"
    }

    fn min_token(&self) -> Self::TokenType {
        ByteOrderedToken::min()
    }

    fn hash(&self, key: &[u8]) -> Self::TokenType {
        ByteOrderedToken::from_bytes(key)
    }

    fn token_from_str(&self, text: &str) -> Result<Self::TokenType> {
        Ok(ByteOrderedToken::from_bytes(text.as_bytes()))
    }

    fn split(
        &self,
        start: &ByteOrderedToken,
        end: &ByteOrderedToken,
        n: usize,
    ) -> Result<Vec<ByteOrderedToken>> {
        let order = start.cmp(end);
        check_split_request(order == Ordering::Equal, n)?;

        let wraps = order == Ordering::Greater;
        let wanted = BigInt::from(n);
        let mut significant_bytes = start.as_bytes().len().max(end.as_bytes().len());

        let mut added = 0;
        let (start_int, width, ring, significant_bytes) = loop {
            let start_int = padded_integer(start.as_bytes(), significant_bytes);
            let end_int = padded_integer(end.as_bytes(), significant_bytes);
            let (width, ring) = if wraps {
                let ring_end = BigInt::one() << (significant_bytes * 8);
                let length = &ring_end + BigInt::one();
                let width = &end_int - &start_int + &length;
                (width, Some(RingBounds { end: ring_end, length }))
            } else {
                (&end_int - &start_int, None)
            };
            if added == MAX_ADDED_BYTES || width >= wanted {
                break (start_int, width, ring, significant_bytes);
            }
            significant_bytes += 1;
            added += 1;
        };
        debug!(significant_bytes, %width, n, wraps, "splitting byte-ordered range");

        let points = split_range(start_int, width, ring.as_ref(), n)?;
        Ok(points
            .into_iter()
            .map(|point| to_token(point, significant_bytes))
            .collect())
    }
}

/// Reads `bytes` as an unsigned big-endian integer of `width` bytes,
/// padding with zero bytes on the right.
fn padded_integer(bytes: &[u8], width: usize) -> BigInt {
    let mut padded = bytes.to_vec();
    padded.resize(width.max(bytes.len()), 0);
    BigInt::from_bytes_be(Sign::Plus, &padded)
}

/// Big-endian encoding left-padded with zero bytes to `width`.
///
/// The wrapped ring end `2^(8 * width)` needs one more byte and keeps it.
fn to_token(value: BigInt, width: usize) -> ByteOrderedToken {
    let (_, magnitude) = value.to_bytes_be();
    if magnitude.len() >= width {
        return ByteOrderedToken::from_bytes(magnitude);
    }
    let mut bytes = vec![0; width - magnitude.len()];
    bytes.extend_from_slice(&magnitude);
    ByteOrderedToken::from_bytes(bytes)
}
