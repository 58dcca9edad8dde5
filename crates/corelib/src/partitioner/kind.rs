//! Runtime selection of a partitioner from its class name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::partitioner::{ByteOrderedPartitioner, Murmur3Partitioner, Partitioner, RandomPartitioner};
use crate::token::AnyToken;

/// The supported partitioners, as announced by cluster metadata.
///
/// Serialized as the fully qualified Cassandra class name; any name carrying
/// a known suffix is accepted when parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartitionerKind {
    Murmur3,
    Random,
    ByteOrdered,
}

impl PartitionerKind {
    /// Finds the partitioner for a class name, matching on its suffix.
    ///
    /// Returns `None` for unsupported partitioners; callers decide how to
    /// degrade.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.ends_with("Murmur3Partitioner") {
            Some(PartitionerKind::Murmur3)
        } else if name.ends_with("RandomPartitioner") {
            Some(PartitionerKind::Random)
        } else if name.ends_with("OrderedPartitioner") {
            Some(PartitionerKind::ByteOrdered)
        } else {
            None
        }
    }

    /// Fully qualified Cassandra class name.
    pub fn class_name(&self) -> &'static str {
        match self {
            PartitionerKind::Murmur3 => "org.apache.cassandra.dht.Murmur3Partitioner",
            PartitionerKind::Random => "org.apache.cassandra.dht.RandomPartitioner",
            PartitionerKind::ByteOrdered => "org.apache.cassandra.dht.ByteOrderedPartitioner",
        }
    }

    /// Simple class name, as returned by [`Partitioner::name`].
    pub fn name(&self) -> &'static str {
        match self {
            PartitionerKind::Murmur3 => Murmur3Partitioner.name(),
            PartitionerKind::Random => RandomPartitioner.name(),
            PartitionerKind::ByteOrdered => ByteOrderedPartitioner.name(),
        }
    }

    pub fn hash(&self, key: &[u8]) -> AnyToken {
        match self {
            PartitionerKind::Murmur3 => Murmur3Partitioner.hash(key).into(),
            PartitionerKind::Random => RandomPartitioner.hash(key).into(),
            PartitionerKind::ByteOrdered => ByteOrderedPartitioner.hash(key).into(),
        }
    }

    pub fn token_from_str(&self, text: &str) -> Result<AnyToken> {
        Ok(match self {
            PartitionerKind::Murmur3 => Murmur3Partitioner.token_from_str(text)?.into(),
            PartitionerKind::Random => RandomPartitioner.token_from_str(text)?.into(),
            PartitionerKind::ByteOrdered => ByteOrderedPartitioner.token_from_str(text)?.into(),
        })
    }

    pub fn min_token(&self) -> AnyToken {
        match self {
            PartitionerKind::Murmur3 => Murmur3Partitioner.min_token().into(),
            PartitionerKind::Random => RandomPartitioner.min_token().into(),
            PartitionerKind::ByteOrdered => ByteOrderedPartitioner.min_token().into(),
        }
    }
}

impl FromStr for PartitionerKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        PartitionerKind::from_name(name).ok_or_else(|| Error::UnknownPartitioner(name.to_string()))
    }
}

impl TryFrom<String> for PartitionerKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<PartitionerKind> for String {
    fn from(kind: PartitionerKind) -> Self {
        kind.class_name().to_string()
    }
}

impl fmt::Display for PartitionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ByteOrderedToken, Murmur3Token};

    #[test]
    fn test_from_name_matches_suffix() {
        assert_eq!(
            PartitionerKind::from_name("org.apache.cassandra.dht.Murmur3Partitioner"),
            Some(PartitionerKind::Murmur3)
        );
        assert_eq!(PartitionerKind::from_name("RandomPartitioner"), Some(PartitionerKind::Random));
        assert_eq!(
            PartitionerKind::from_name("org.apache.cassandra.dht.ByteOrderedPartitioner"),
            Some(PartitionerKind::ByteOrdered)
        );
        assert_eq!(PartitionerKind::from_name("org.apache.cassandra.dht.LocalPartitioner"), None);
        assert!(matches!(
            "LocalPartitioner".parse::<PartitionerKind>(),
            Err(Error::UnknownPartitioner(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(PartitionerKind::Murmur3.name(), "Murmur3Partitioner");
        assert_eq!(
            PartitionerKind::Random.to_string(),
            "org.apache.cassandra.dht.RandomPartitioner"
        );
    }

    #[test]
    fn test_hash_dispatches_to_partitioner() {
        let token = PartitionerKind::Murmur3.hash(&1i32.to_be_bytes());
        assert_eq!(token, AnyToken::Murmur3(Murmur3Token(-4069959284402364209)));
        assert_eq!(token.kind(), PartitionerKind::Murmur3);
        assert_eq!(token.cql_type(), "bigint");

        let token = PartitionerKind::ByteOrdered.hash(b"abc");
        assert_eq!(token.as_byte_ordered(), Some(&ByteOrderedToken::from_bytes(b"abc")));
        assert!(token.as_murmur3().is_none());
    }

    #[test]
    fn test_token_from_str_and_min_token() {
        let min = PartitionerKind::Random.min_token();
        assert!(min.is_min_token());
        assert_eq!(PartitionerKind::Random.token_from_str("-1").unwrap(), min);
        assert_eq!(min.serialize().as_ref(), &[0xff]);
        assert!(PartitionerKind::Murmur3.token_from_str("nope").is_err());
        assert_eq!(PartitionerKind::ByteOrdered.min_token().to_string(), "");
    }

    #[test]
    fn test_serde_uses_class_name() {
        let json = serde_json::to_string(&PartitionerKind::Murmur3).unwrap();
        assert_eq!(json, "\"org.apache.cassandra.dht.Murmur3Partitioner\"");
        let kind: PartitionerKind = serde_json::from_str("\"RandomPartitioner\"").unwrap();
        assert_eq!(kind, PartitionerKind::Random);
        assert!(serde_json::from_str::<PartitionerKind>("\"Nope\"").is_err());
    }
}
