//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Mixing tokens of different partitioners is not listed here: the token and
/// range types are generic over the partitioner, so such mixes do not compile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text is not a valid token for the partitioner.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Split with equal bounds or a zero split count.
    #[error("invalid split: {0}")]
    InvalidSplit(String),

    /// Ranges neither intersect nor are adjacent.
    #[error("ranges cannot be merged: {0}")]
    NotMergeable(String),

    /// Ranges do not intersect.
    #[error("ranges do not intersect: {0}")]
    NoIntersection(String),

    /// Partitioner class name is not supported.
    #[error("unknown partitioner: {0}")]
    UnknownPartitioner(String),
}
