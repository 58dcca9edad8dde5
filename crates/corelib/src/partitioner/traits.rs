//! Core partitioner trait definitions.

use std::fmt::Debug;

use crate::error::Result;
use crate::token::Token;

/// A partitioner maps partition keys to tokens and defines the ring they live on.
///
/// Partitioners are stateless and thread-safe, allowing concurrent token
/// generation without synchronization overhead. The concrete partitioners are
/// zero-sized values; copy them freely.
pub trait Partitioner: Copy + Debug + Default + Send + Sync + 'static {
    /// The token type produced by this partitioner.
    type TokenType: Token;

    /// Returns the simple class name of this partitioner.
    fn name(&self) -> &'static str;

    /// Returns the minimum token, the ring's wrap marker.
    fn min_token(&self) -> Self::TokenType;

    /// Converts a serialized partition key into a token.
    ///
    /// # Arguments
    ///
    /// * `key` - The serialized partition key
    ///
    /// # Returns
    ///
    /// A token representing the position on the ring
    fn hash(&self, key: &[u8]) -> Self::TokenType;

    /// Parses a token from its canonical string form.
    fn token_from_str(&self, text: &str) -> Result<Self::TokenType>;

    /// Splits the arc `(start, end]` into `n` sub-arcs of (nearly) equal width.
    ///
    /// Returns the `n - 1` interior boundaries in ring order from `start`
    /// towards `end`. When the arc has fewer than `n` distinct positions some
    /// boundaries repeat.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidSplit`] if `start == end`, `n == 0` or `n` exceeds
    /// [`crate::partitioner::MAX_SPLITS`].
    fn split(
        &self,
        start: &Self::TokenType,
        end: &Self::TokenType,
        n: usize,
    ) -> Result<Vec<Self::TokenType>>;
}
