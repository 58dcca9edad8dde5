//! Subcommands and their output.
//!
//! Every command runs against one partitioner picked at runtime, then works on
//! that partitioner's concrete token type.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use corelib::{
    ByteOrderedPartitioner, Murmur3Partitioner, Partitioner, PartitionerKind, RandomPartitioner,
    Token, TokenRange, TokenRing,
};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the token of each key, hashing its UTF-8 bytes.
    Hash {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },

    /// Split (START, END] into N contiguous ranges.
    Split {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
        n: usize,
    },

    /// Print the non-wrapping pieces of (START, END].
    Unwrap {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
    },

    /// Merge two intersecting or adjacent ranges.
    Merge {
        #[arg(allow_hyphen_values = true)]
        start1: String,
        #[arg(allow_hyphen_values = true)]
        end1: String,
        #[arg(allow_hyphen_values = true)]
        start2: String,
        #[arg(allow_hyphen_values = true)]
        end2: String,
    },

    /// Print the ranges covering the tokens two ranges share.
    Intersect {
        #[arg(allow_hyphen_values = true)]
        start1: String,
        #[arg(allow_hyphen_values = true)]
        end1: String,
        #[arg(allow_hyphen_values = true)]
        start2: String,
        #[arg(allow_hyphen_values = true)]
        end2: String,
    },

    /// Print the ring ranges induced by a set of tokens.
    Ranges {
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
}

/// A hashed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyToken {
    pub key: String,
    pub token: String,
    pub cql_type: &'static str,
    /// Hex of the serialized token value.
    pub serialized: String,
}

/// A range in canonical string form.
///
/// Byte-ordered bounds need not be UTF-8, so the hex of each serialized bound
/// is kept alongside the display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeView {
    pub start: String,
    pub end: String,
    pub start_serialized: String,
    pub end_serialized: String,
    pub wrapped: bool,
}

impl<P: Partitioner> From<&TokenRange<P>> for RangeView {
    fn from(range: &TokenRange<P>) -> Self {
        Self {
            start: range.start().to_string(),
            end: range.end().to_string(),
            start_serialized: to_hex(&range.start().serialize()),
            end_serialized: to_hex(&range.end().serialize()),
            wrapped: range.is_wrapped_around(),
        }
    }
}

/// Output of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    Tokens(Vec<KeyToken>),
    Ranges(Vec<RangeView>),
}

impl CommandResult {
    fn ranges<P: Partitioner>(ranges: &[TokenRange<P>]) -> Self {
        Self::Ranges(ranges.iter().map(RangeView::from).collect())
    }

    /// Writes one line per item, or a JSON document.
    pub fn write_to(&self, out: &mut impl Write, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self).context("failed to encode output")?;
            writeln!(out)?;
            return Ok(());
        }
        match self {
            Self::Tokens(tokens) => {
                for t in tokens {
                    writeln!(out, "{}\t{}", t.key, t.token)?;
                }
            }
            Self::Ranges(ranges) => {
                for r in ranges {
                    writeln!(out, "({}, {}]", r.start, r.end)?;
                }
            }
        }
        Ok(())
    }
}

impl Command {
    pub fn execute(&self, kind: PartitionerKind) -> Result<CommandResult> {
        debug!(partitioner = %kind, command = ?self, "executing");
        match kind {
            PartitionerKind::Murmur3 => self.execute_with(Murmur3Partitioner),
            PartitionerKind::Random => self.execute_with(RandomPartitioner),
            PartitionerKind::ByteOrdered => self.execute_with(ByteOrderedPartitioner),
        }
    }

    fn execute_with<P: Partitioner>(&self, partitioner: P) -> Result<CommandResult> {
        let result = match self {
            Self::Hash { keys } => CommandResult::Tokens(
                keys.iter()
                    .map(|key| {
                        let token = partitioner.hash(key.as_bytes());
                        KeyToken {
                            key: key.clone(),
                            token: token.to_string(),
                            cql_type: token.cql_type(),
                            serialized: to_hex(&token.serialize()),
                        }
                    })
                    .collect(),
            ),
            Self::Split { start, end, n } => {
                let range = parse_range(partitioner, start, end)?;
                let parts = range
                    .split_evenly(*n)
                    .with_context(|| format!("cannot split {} into {}", range, n))?;
                CommandResult::ranges(&parts)
            }
            Self::Unwrap { start, end } => {
                CommandResult::ranges(&parse_range(partitioner, start, end)?.unwrap())
            }
            Self::Merge {
                start1,
                end1,
                start2,
                end2,
            } => {
                let a = parse_range(partitioner, start1, end1)?;
                let b = parse_range(partitioner, start2, end2)?;
                CommandResult::ranges(&[a.merge_with(&b)?])
            }
            Self::Intersect {
                start1,
                end1,
                start2,
                end2,
            } => {
                let a = parse_range(partitioner, start1, end1)?;
                let b = parse_range(partitioner, start2, end2)?;
                CommandResult::ranges(&a.intersect_with(&b)?)
            }
            Self::Ranges { tokens } => {
                let tokens = tokens
                    .iter()
                    .map(|t| parse_token(partitioner, t))
                    .collect::<Result<Vec<_>>>()?;
                CommandResult::ranges(&TokenRing::new(partitioner, tokens).ranges())
            }
        };
        Ok(result)
    }
}

fn parse_token<P: Partitioner>(partitioner: P, text: &str) -> Result<P::TokenType> {
    partitioner
        .token_from_str(text)
        .with_context(|| format!("invalid {} token {:?}", partitioner.name(), text))
}

fn parse_range<P: Partitioner>(partitioner: P, start: &str, end: &str) -> Result<TokenRange<P>> {
    Ok(TokenRange::new(
        partitioner,
        parse_token(partitioner, start)?,
        parse_token(partitioner, end)?,
    ))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
