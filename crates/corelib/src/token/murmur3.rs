//! Murmur3 token implementation (Cassandra-compatible).

use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Error;
use crate::token::traits::Token;

/// Murmur3 token: a signed 64-bit ring position.
///
/// `i64::MIN` is reserved as the minimum token; hashing never produces it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Murmur3Token(pub i64);

impl Murmur3Token {
    /// The minimum token (ring wrap marker).
    pub const MIN: Murmur3Token = Murmur3Token(i64::MIN);

    /// The largest token on the ring.
    pub const MAX: Murmur3Token = Murmur3Token(i64::MAX);

    /// Returns the raw token value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Token for Murmur3Token {
    const CQL_TYPE: &'static str = "bigint";

    fn is_min_token(&self) -> bool {
        self.0 == i64::MIN
    }

    fn serialize(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(8);
        buf.put_i64(self.0);
        buf.freeze()
    }
}

impl From<i64> for Murmur3Token {
    fn from(value: i64) -> Self {
        Murmur3Token(value)
    }
}

impl FromStr for Murmur3Token {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.trim()
            .parse::<i64>()
            .map(Murmur3Token)
            .map_err(|e| Error::InvalidToken(format!("{:?} is not a Murmur3 token: {}", text, e)))
    }
}

impl fmt::Display for Murmur3Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Murmur3Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Murmur3Token({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_token() {
        assert!(Murmur3Token::MIN.is_min_token());
        assert!(!Murmur3Token(0).is_min_token());
        assert!(!Murmur3Token::MAX.is_min_token());
    }

    #[test]
    fn test_serialize_is_big_endian_bigint() {
        assert_eq!(Murmur3Token(1).serialize().as_ref(), &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(Murmur3Token(-2).serialize().as_ref(), &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(Murmur3Token::CQL_TYPE, "bigint");
        assert_eq!(Murmur3Token(1).cql_type(), "bigint");
    }

    #[test]
    fn test_parse_and_display() {
        let token: Murmur3Token = "-9223372036854775808".parse().unwrap();
        assert_eq!(token, Murmur3Token::MIN);
        assert_eq!(token.to_string(), "-9223372036854775808");
        assert_eq!(format!("{:?}", Murmur3Token(42)), "Murmur3Token(42)");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("abc".parse::<Murmur3Token>(), Err(Error::InvalidToken(_))));
        assert!("9223372036854775808".parse::<Murmur3Token>().is_err());
    }

    #[test]
    fn test_ordering_is_signed() {
        assert!(Murmur3Token::MIN < Murmur3Token(-1));
        assert!(Murmur3Token(-1) < Murmur3Token(0));
        assert!(Murmur3Token(0) < Murmur3Token::MAX);
    }
}
