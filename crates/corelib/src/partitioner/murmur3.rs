//! Murmur3 partitioner implementation (Cassandra-compatible).
//!
//! Tokens are the first 64 bits of the x64 128-bit MurmurHash3 of the key,
//! seeded with 0. Cassandra's variant reads the trailing `len % 16` bytes as
//! *signed* bytes, so the tail differs from the reference implementation for
//! bytes >= 0x80; that quirk is reproduced here bit for bit.

use tracing::{debug, trace};

use crate::error::Result;
use crate::partitioner::split::{arc_width, check_split_request, split_range, RingBounds};
use crate::partitioner::traits::Partitioner;
use crate::token::murmur3::Murmur3Token;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Murmur3 partitioner (Cassandra default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Murmur3Partitioner;

impl Murmur3Partitioner {
    fn ring() -> RingBounds<i128> {
        RingBounds {
            end: i64::MAX as i128,
            length: 1i128 << 64,
        }
    }
}

impl Partitioner for Murmur3Partitioner {
    type TokenType = Murmur3Token;

    fn name(&self) -> &'static str {
        "Murmur3Partitioner"
    }

    fn min_token(&self) -> Self::TokenType {
        Murmur3Token::MIN
    }

    fn hash(&self, key: &[u8]) -> Self::TokenType {
        let value = murmur3_h1(key);
        trace!(len = key.len(), value, "murmur3 hash");
        // The minimum is the ring's wrap marker and must never be a key's token.
        if value == i64::MIN {
            Murmur3Token::MAX
        } else {
            Murmur3Token(value)
        }
    }

    fn token_from_str(&self, text: &str) -> Result<Self::TokenType> {
        text.parse()
    }

    fn split(&self, start: &Murmur3Token, end: &Murmur3Token, n: usize) -> Result<Vec<Murmur3Token>> {
        check_split_request(start == end, n)?;

        let ring = Self::ring();
        let start = start.0 as i128;
        let width = arc_width(&start, &(end.0 as i128), &ring.length);
        debug!(start, width, n, "splitting murmur3 range");

        let points = split_range(start, width, Some(&ring), n)?;
        // Every point is back within the i64 range after wrapping.
        Ok(points.into_iter().map(|p| Murmur3Token(p as i64)).collect())
    }
}

#[inline]
fn rotl64(v: u64, n: u32) -> u64 {
    v.rotate_left(n)
}

#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// Little-endian u64 from an 8-byte block.
#[inline]
fn block_u64(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    rotl64(k1.wrapping_mul(C1), 31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    rotl64(k2.wrapping_mul(C2), 33).wrapping_mul(C1)
}

/// First half (`h1`) of Cassandra's MurmurHash3 x64/128 with seed 0.
pub(crate) fn murmur3_h1(data: &[u8]) -> i64 {
    let mut h1: u64 = 0;
    let mut h2: u64 = 0;

    let mut blocks = data.chunks_exact(16);
    for block in &mut blocks {
        let (lo, hi) = block.split_at(8);

        h1 ^= mix_k1(block_u64(lo));
        h1 = rotl64(h1, 27).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        h2 ^= mix_k2(block_u64(hi));
        h2 = rotl64(h2, 31).wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let tail = blocks.remainder();
    let mut k1: u64 = 0;
    let mut k2: u64 = 0;
    for (i, &byte) in tail.iter().enumerate() {
        // Sign-extended, as Cassandra reads tail bytes as Java bytes.
        let v = byte as i8 as i64 as u64;
        if i >= 8 {
            k2 ^= v << ((i - 8) * 8);
        } else {
            k1 ^= v << (i * 8);
        }
    }
    if tail.len() > 8 {
        h2 ^= mix_k2(k2);
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(k1);
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h1 as i64
}
