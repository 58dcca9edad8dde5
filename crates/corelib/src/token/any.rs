//! Token of a partitioner chosen at runtime.

use std::fmt;

use bytes::Bytes;

use crate::partitioner::PartitionerKind;
use crate::token::{ByteOrderedToken, Murmur3Token, RandomToken, Token};

/// A token whose partitioner is only known at runtime, e.g. from the
/// partitioner name announced by cluster metadata.
///
/// `AnyToken` is not `Ord`: tokens of different partitioners
/// have no meaningful order. Extract the concrete token with `as_*` and work
/// with the typed API to compare or build ranges.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AnyToken {
    Murmur3(Murmur3Token),
    Random(RandomToken),
    ByteOrdered(ByteOrderedToken),
}

impl AnyToken {
    /// Partitioner that produced this token.
    pub fn kind(&self) -> PartitionerKind {
        match self {
            AnyToken::Murmur3(_) => PartitionerKind::Murmur3,
            AnyToken::Random(_) => PartitionerKind::Random,
            AnyToken::ByteOrdered(_) => PartitionerKind::ByteOrdered,
        }
    }

    pub fn is_min_token(&self) -> bool {
        match self {
            AnyToken::Murmur3(t) => t.is_min_token(),
            AnyToken::Random(t) => t.is_min_token(),
            AnyToken::ByteOrdered(t) => t.is_min_token(),
        }
    }

    /// Serialized form, usable as a bound `token(...)` value.
    pub fn serialize(&self) -> Bytes {
        match self {
            AnyToken::Murmur3(t) => t.serialize(),
            AnyToken::Random(t) => t.serialize(),
            AnyToken::ByteOrdered(t) => t.serialize(),
        }
    }

    pub fn cql_type(&self) -> &'static str {
        match self {
            AnyToken::Murmur3(t) => t.cql_type(),
            AnyToken::Random(t) => t.cql_type(),
            AnyToken::ByteOrdered(t) => t.cql_type(),
        }
    }

    pub fn as_murmur3(&self) -> Option<&Murmur3Token> {
        match self {
            AnyToken::Murmur3(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_random(&self) -> Option<&RandomToken> {
        match self {
            AnyToken::Random(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_byte_ordered(&self) -> Option<&ByteOrderedToken> {
        match self {
            AnyToken::ByteOrdered(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Murmur3Token> for AnyToken {
    fn from(token: Murmur3Token) -> Self {
        AnyToken::Murmur3(token)
    }
}

impl From<RandomToken> for AnyToken {
    fn from(token: RandomToken) -> Self {
        AnyToken::Random(token)
    }
}

impl From<ByteOrderedToken> for AnyToken {
    fn from(token: ByteOrderedToken) -> Self {
        AnyToken::ByteOrdered(token)
    }
}

impl fmt::Display for AnyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyToken::Murmur3(t) => fmt::Display::fmt(t, f),
            AnyToken::Random(t) => fmt::Display::fmt(t, f),
            AnyToken::ByteOrdered(t) => fmt::Display::fmt(t, f),
        }
    }
}
