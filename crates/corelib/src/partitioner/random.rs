//! Random partitioner implementation.
//!
//! Tokens are the absolute value of the key's MD5 digest read as a signed
//! big-endian integer, so the ring spans `[0, 2^127]`; `-1` is the minimum token.

use md5::{Digest, Md5};
use num_bigint::BigInt;
use num_traits::{One, Signed};
use tracing::{debug, trace};

use crate::error::Result;
use crate::partitioner::split::{arc_width, check_split_request, split_range, RingBounds};
use crate::partitioner::traits::Partitioner;
use crate::token::random::{max_value, RandomToken};

/// Random partitioner (MD5-based).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RandomPartitioner;

impl RandomPartitioner {
    fn ring() -> RingBounds<BigInt> {
        let end = max_value().clone();
        let length = &end + BigInt::one();
        RingBounds { end, length }
    }
}

impl Partitioner for RandomPartitioner {
    type TokenType = RandomToken;

    fn name(&self) -> &'static str {
        "RandomPartitioner"
    }

    fn min_token(&self) -> Self::TokenType {
        RandomToken::min()
    }

    fn hash(&self, key: &[u8]) -> Self::TokenType {
        let digest = Md5::digest(key);
        let value = BigInt::from_signed_bytes_be(&digest).abs();
        trace!(len = key.len(), %value, "md5 hash");
        RandomToken::new_unchecked(value)
    }

    fn token_from_str(&self, text: &str) -> Result<Self::TokenType> {
        text.parse()
    }

    fn split(&self, start: &RandomToken, end: &RandomToken, n: usize) -> Result<Vec<RandomToken>> {
        check_split_request(start == end, n)?;

        let ring = Self::ring();
        let width = arc_width(start.value(), end.value(), &ring.length);
        debug!(start = %start, %width, n, "splitting random partitioner range");

        let points = split_range(start.value().clone(), width, Some(&ring), n)?;
        Ok(points.into_iter().map(RandomToken::new_unchecked).collect())
    }
}
