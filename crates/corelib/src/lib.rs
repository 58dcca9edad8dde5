//! Token ring partitioning and range algebra for Cassandra-compatible clients.
//!
//! This crate provides the ring geometry a client needs for replica discovery
//! and parallel range scans:
//! - Token types for the Murmur3, Random and ByteOrdered partitioners
//! - Partitioners: key hashing, token parsing and even splitting of arcs
//! - Token ranges with wraparound-aware interval algebra
//! - The ranges induced by the tokens announced by a cluster
//!
//! Everything here is an immutable value or a pure function; partitioners are
//! zero-sized and can be shared across threads freely.
//!
//! ```
//! use corelib::{Murmur3Partitioner, Partitioner, TokenRange};
//!
//! let p = Murmur3Partitioner;
//! let range = TokenRange::new(p, p.token_from_str("0")?, p.token_from_str("11")?);
//! let splits = range.split_evenly(3)?;
//! assert_eq!(splits[0].end().to_string(), "4");
//! # Ok::<(), corelib::Error>(())
//! ```

pub mod error;
pub mod partitioner;
pub mod range;
pub mod ring;
pub mod token;

pub use error::{Error, Result};
pub use partitioner::{
    ByteOrderedPartitioner, Murmur3Partitioner, Partitioner, PartitionerKind, RandomPartitioner,
};
pub use range::{ScanBound, TokenRange};
pub use ring::TokenRing;
pub use token::{AnyToken, ByteOrderedToken, Murmur3Token, RandomToken, Token};
