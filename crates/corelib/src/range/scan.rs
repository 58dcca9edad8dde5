//! Comparison bounds for scanning a token range.
//!
//! Range queries can only express `token(k) > a`, `token(k) <= b` or both, so
//! a range becomes one or two [`ScanBound`]s: a wrapped range needs two
//! queries, a range ending at the minimum token is open above.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// One comparison-based query covering part of a token range.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanBound<T> {
    /// `token(k) > start`
    After(T),
    /// `token(k) > start AND token(k) <= end`
    Between(T, T),
    /// `token(k) <= end`
    AtMost(T),
}

impl<T: Token> ScanBound<T> {
    /// Exclusive lower bound, if any.
    pub fn lower(&self) -> Option<&T> {
        match self {
            ScanBound::After(start) | ScanBound::Between(start, _) => Some(start),
            ScanBound::AtMost(_) => None,
        }
    }

    /// Inclusive upper bound, if any.
    pub fn upper(&self) -> Option<&T> {
        match self {
            ScanBound::Between(_, end) | ScanBound::AtMost(end) => Some(end),
            ScanBound::After(_) => None,
        }
    }

    /// Whether a row with this token satisfies the query.
    pub fn matches(&self, token: &T) -> bool {
        self.lower().map_or(true, |start| token > start) && self.upper().map_or(true, |end| token <= end)
    }
}
