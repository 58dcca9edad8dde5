//! Partitioner abstraction.
//!
//! Partitioners convert partition keys into tokens, parse tokens from their
//! string form and split arcs of their ring for parallel scans.

pub mod byte_ordered;
pub mod kind;
pub mod murmur3;
pub mod random;
pub(crate) mod split;
pub mod traits;

pub use byte_ordered::ByteOrderedPartitioner;
pub use kind::PartitionerKind;
pub use murmur3::Murmur3Partitioner;
pub use random::RandomPartitioner;
pub use split::MAX_SPLITS;
pub use traits::Partitioner;
