//! Token abstraction module.
//!
//! Tokens are positions on the ring. Each partitioner has its own token type
//! and the types never mix: a range or a split is always built from tokens of
//! a single partitioner.

pub mod any;
pub mod byte_ordered;
pub mod murmur3;
pub mod random;
pub mod traits;

pub use any::AnyToken;
pub use byte_ordered::ByteOrderedToken;
pub use murmur3::Murmur3Token;
pub use random::RandomToken;
pub use traits::Token;

/// Serializes a token as its canonical string and parses it back the same way.
macro_rules! impl_string_serde {
    ($($token:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $token {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $token {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                    let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                    text.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

impl_string_serde!(Murmur3Token, RandomToken, ByteOrderedToken);
