//! Core token trait definitions.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use bytes::Bytes;

/// A position on the ring.
///
/// Tokens are immutable, totally ordered values. Implementations must be
/// thread-safe and cheap to compare and hash. `Display` renders the canonical
/// string form, which the owning partitioner's `token_from_str` parses back.
pub trait Token: Clone + Ord + Hash + Send + Sync + Debug + Display + 'static {
    /// CQL type under which [`Token::serialize`] output is bound.
    const CQL_TYPE: &'static str;

    /// [`Token::CQL_TYPE`] of this token's type.
    fn cql_type(&self) -> &'static str {
        Self::CQL_TYPE
    }

    /// True if this token is the ring's minimum (wrap) sentinel.
    fn is_min_token(&self) -> bool;

    /// Serialized form, usable as the bound value of a `token(...)` comparison.
    fn serialize(&self) -> Bytes;
}
