//! Ranges induced by the tokens of a cluster.
//!
//! Cluster metadata announces the tokens owned by each host. Sorted, they cut
//! the ring into ranges `(previous, token]`, the last one wrapping back to the
//! first token. Which hosts replicate a range is left to the caller; this type
//! only supplies the geometry.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::partitioner::Partitioner;
use crate::range::TokenRange;

/// The ordered set of tokens placed on a ring.
#[derive(Debug, Clone)]
pub struct TokenRing<P: Partitioner> {
    partitioner: P,
    tokens: BTreeSet<P::TokenType>,
}

impl<P: Partitioner> TokenRing<P> {
    /// Creates a ring from announced tokens. Duplicates are ignored.
    pub fn new(partitioner: P, tokens: impl IntoIterator<Item = P::TokenType>) -> Self {
        Self {
            partitioner,
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn partitioner(&self) -> P {
        self.partitioner
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in ring order.
    pub fn tokens(&self) -> impl Iterator<Item = &P::TokenType> {
        self.tokens.iter()
    }

    /// The ranges between consecutive tokens, in ring order, ending with the
    /// range that wraps from the last token to the first.
    ///
    /// A single token owns the whole ring; an empty ring has no ranges.
    pub fn ranges(&self) -> Vec<TokenRange<P>> {
        let (first, last) = match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec::new(),
        };
        if self.tokens.len() == 1 {
            return vec![TokenRange::full_ring(self.partitioner)];
        }

        let mut ranges = Vec::with_capacity(self.tokens.len());
        let mut previous = first;
        for token in self.tokens.iter().skip(1) {
            ranges.push(TokenRange::new(self.partitioner, previous.clone(), token.clone()));
            previous = token;
        }
        ranges.push(TokenRange::new(self.partitioner, last.clone(), first.clone()));
        ranges
    }

    /// The range owning `token`: it ends at the first ring token `>= token`,
    /// or at the first token overall when `token` is past the last one.
    pub fn range_containing(&self, token: &P::TokenType) -> Option<TokenRange<P>> {
        let first = self.tokens.first()?;
        if self.tokens.len() == 1 {
            return Some(TokenRange::full_ring(self.partitioner));
        }

        let end = self.tokens.range(token..).next().unwrap_or(first);
        let start = self
            .tokens
            .range((Bound::Unbounded, Bound::Excluded(end)))
            .next_back()
            .or_else(|| self.tokens.last())?;
        Some(TokenRange::new(self.partitioner, start.clone(), end.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::Murmur3Partitioner;
    use crate::token::Murmur3Token;

    fn ring(tokens: &[i64]) -> TokenRing<Murmur3Partitioner> {
        TokenRing::new(Murmur3Partitioner, tokens.iter().copied().map(Murmur3Token))
    }

    fn range(start: i64, end: i64) -> TokenRange<Murmur3Partitioner> {
        TokenRange::new(Murmur3Partitioner, Murmur3Token(start), Murmur3Token(end))
    }

    #[test]
    fn test_empty_ring() {
        let ring = ring(&[]);
        assert!(ring.is_empty());
        assert!(ring.ranges().is_empty());
        assert_eq!(ring.range_containing(&Murmur3Token(0)), None);
    }

    #[test]
    fn test_single_token_owns_full_ring() {
        let ring = ring(&[42]);
        assert_eq!(ring.ranges(), vec![TokenRange::full_ring(Murmur3Partitioner)]);
        assert!(ring.range_containing(&Murmur3Token(7)).unwrap().is_full_ring());
    }

    #[test]
    fn test_ranges_cover_ring_in_order() {
        let ring = ring(&[100, -100, 0, 0]);
        assert_eq!(ring.token_count(), 3);
        assert_eq!(ring.ranges(), vec![range(-100, 0), range(0, 100), range(100, -100)]);
        assert!(ring.ranges().last().unwrap().is_wrapped_around());
    }

    #[test]
    fn test_range_containing() {
        let ring = ring(&[-100, 0, 100]);
        assert_eq!(ring.range_containing(&Murmur3Token(50)), Some(range(0, 100)));
        // Range ends are inclusive.
        assert_eq!(ring.range_containing(&Murmur3Token(0)), Some(range(-100, 0)));
        assert_eq!(ring.range_containing(&Murmur3Token(500)), Some(range(100, -100)));
        assert_eq!(ring.range_containing(&Murmur3Token(-500)), Some(range(100, -100)));
    }

    #[test]
    fn test_range_containing_agrees_with_contains() {
        let ring = ring(&[-7, 3, 11, 90]);
        for value in [-100, -7, -6, 0, 3, 4, 11, 50, 90, 91, i64::MAX] {
            let token = Murmur3Token(value);
            let owner = ring.range_containing(&token).unwrap();
            assert!(owner.contains(&token), "{} not in {}", value, owner);
            let owners = ring.ranges().into_iter().filter(|r| r.contains(&token)).count();
            assert_eq!(owners, 1, "{} owned by {} ranges", value, owners);
        }
    }
}
