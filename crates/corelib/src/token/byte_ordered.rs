//! Byte-ordered token implementation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::token::traits::Token;

/// Byte-ordered token: a raw byte string.
///
/// Ordering is lexicographic over unsigned bytes, a shorter string sorting
/// before any longer string it prefixes. The empty string is the minimum token.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteOrderedToken(pub Vec<u8>);

impl ByteOrderedToken {
    /// The minimum token (ring wrap marker).
    pub fn min() -> Self {
        ByteOrderedToken(Vec::new())
    }

    /// Creates a token directly from bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        ByteOrderedToken(bytes.into())
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Token for ByteOrderedToken {
    const CQL_TYPE: &'static str = "blob";

    fn is_min_token(&self) -> bool {
        self.0.is_empty()
    }

    fn serialize(&self) -> Bytes {
        Bytes::copy_from_slice(&self.0)
    }
}

impl FromStr for ByteOrderedToken {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(ByteOrderedToken(text.as_bytes().to_vec()))
    }
}

impl fmt::Display for ByteOrderedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for ByteOrderedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteOrderedToken(0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}
