//! RandomPartitioner token implementation.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::One;

use crate::error::Error;
use crate::token::traits::Token;

/// RandomPartitioner token: an integer in `[0, 2^127]`, or `-1` for the
/// minimum token.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RandomToken(BigInt);

/// Largest token on the ring, `2^127`.
pub(crate) fn max_value() -> &'static BigInt {
    static MAX: OnceLock<BigInt> = OnceLock::new();
    MAX.get_or_init(|| BigInt::one() << 127usize)
}

impl RandomToken {
    /// The minimum token (ring wrap marker).
    pub fn min() -> Self {
        RandomToken(-BigInt::one())
    }

    /// The largest token on the ring.
    pub fn max() -> Self {
        RandomToken(max_value().clone())
    }

    /// Returns the raw token value.
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Wraps a value already known to lie on the ring.
    pub(crate) fn new_unchecked(value: BigInt) -> Self {
        RandomToken(value)
    }
}

impl TryFrom<BigInt> for RandomToken {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        if value < -BigInt::one() || &value > max_value() {
            return Err(Error::InvalidToken(format!(
                "{} is outside the RandomPartitioner ring [-1, 2^127]",
                value
            )));
        }
        Ok(RandomToken(value))
    }
}

impl Token for RandomToken {
    const CQL_TYPE: &'static str = "varint";

    fn is_min_token(&self) -> bool {
        self.0 == -BigInt::one()
    }

    fn serialize(&self) -> Bytes {
        // Two's-complement big-endian, shortest form: the CQL varint encoding.
        Bytes::from(self.0.to_signed_bytes_be())
    }
}

impl FromStr for RandomToken {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = text
            .trim()
            .parse::<BigInt>()
            .map_err(|e| Error::InvalidToken(format!("{:?} is not a RandomPartitioner token: {}", text, e)))?;
        RandomToken::try_from(value)
    }
}

impl fmt::Display for RandomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RandomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RandomToken({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_token() {
        assert!(RandomToken::min().is_min_token());
        assert!(!"0".parse::<RandomToken>().unwrap().is_min_token());
        assert!(!"1".parse::<RandomToken>().unwrap().is_min_token());
        assert!(RandomToken::min() < "0".parse::<RandomToken>().unwrap());
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!("-1".parse::<RandomToken>().unwrap(), RandomToken::min());
        assert_eq!(
            "170141183460469231731687303715884105728".parse::<RandomToken>().unwrap(),
            RandomToken::max()
        );
        assert!("170141183460469231731687303715884105729".parse::<RandomToken>().is_err());
        assert!("-2".parse::<RandomToken>().is_err());
        assert!("12x".parse::<RandomToken>().is_err());
    }

    #[test]
    fn test_serialize_is_varint() {
        let token: RandomToken = "255".parse().unwrap();
        assert_eq!(token.serialize().as_ref(), &[0x00, 0xff]);
        assert_eq!(RandomToken::min().serialize().as_ref(), &[0xff]);
        assert_eq!("0".parse::<RandomToken>().unwrap().serialize().as_ref(), &[0x00]);
        assert_eq!(RandomToken::CQL_TYPE, "varint");
        assert_eq!(RandomToken::min().cql_type(), "varint");
    }

    #[test]
    fn test_display_round_trip() {
        let text = "42535295865117307932921825928971026432";
        let token: RandomToken = text.parse().unwrap();
        assert_eq!(token.to_string(), text);
        assert_eq!(format!("{:?}", token), format!("RandomToken({})", text));
    }
}
