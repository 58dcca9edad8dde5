//! Token ranges and their algebra.
//!
//! A [`TokenRange`] is the arc of the ring strictly after `start` up to and
//! including `end`, read clockwise. It may wrap past the ring maximum. Two
//! special cases hinge on the partitioner's minimum token:
//!
//! - `(t, t]` is empty, except `(MIN, MIN]` which is the full ring;
//! - a range ending at `MIN` runs to the end of the ring and is not wrapped.

pub mod scan;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::{Error, Result};
use crate::partitioner::Partitioner;
use crate::token::Token;

pub use scan::ScanBound;

/// A range of tokens, start exclusive and end inclusive, on the ring of `P`.
///
/// Ranges of different partitioners are different types, so the algebra below
/// cannot mix them.
#[derive(Clone)]
pub struct TokenRange<P: Partitioner> {
    start: P::TokenType,
    end: P::TokenType,
    partitioner: P,
}

impl<P: Partitioner> TokenRange<P> {
    pub fn new(partitioner: P, start: P::TokenType, end: P::TokenType) -> Self {
        Self {
            start,
            end,
            partitioner,
        }
    }

    /// The range `(MIN, MIN]` covering the whole ring.
    pub fn full_ring(partitioner: P) -> Self {
        Self::new(partitioner, partitioner.min_token(), partitioner.min_token())
    }

    /// Start of the range (exclusive).
    pub fn start(&self) -> &P::TokenType {
        &self.start
    }

    /// End of the range (inclusive).
    pub fn end(&self) -> &P::TokenType {
        &self.end
    }

    pub fn partitioner(&self) -> P {
        self.partitioner
    }

    pub fn into_bounds(self) -> (P::TokenType, P::TokenType) {
        (self.start, self.end)
    }

    fn with_bounds(&self, start: P::TokenType, end: P::TokenType) -> Self {
        Self::new(self.partitioner, start, end)
    }

    /// True for `(t, t]` unless `t` is the minimum token.
    pub fn is_empty(&self) -> bool {
        self.start == self.end && !self.start.is_min_token()
    }

    pub fn is_full_ring(&self) -> bool {
        self.start.is_min_token() && self.end.is_min_token()
    }

    /// True if the range passes the ring maximum, i.e. `start > end` and the
    /// end is not the minimum token.
    pub fn is_wrapped_around(&self) -> bool {
        self.start > self.end && !self.end.is_min_token()
    }

    /// Splits a wrapped range into `(start, MIN]` and `(MIN, end]`.
    ///
    /// Comparison-based range queries cannot express wrapping, so scan the
    /// pieces instead. A range that does not wrap is returned as is.
    pub fn unwrap(&self) -> Vec<Self> {
        if self.is_wrapped_around() {
            let min = self.partitioner.min_token();
            vec![
                self.with_bounds(self.start.clone(), min.clone()),
                self.with_bounds(min, self.end.clone()),
            ]
        } else {
            vec![self.clone()]
        }
    }

    /// Whether `token` falls in the range.
    pub fn contains(&self, token: &P::TokenType) -> bool {
        self.contains_bound(token, false)
    }

    /// Containment for the bounds of another range.
    ///
    /// `is_start` probes another range's start, which is itself exclusive:
    /// it is inside when `>= start` and `< end`. An end is inside when
    /// `> start` and `<= end`. A minimum-token end bounds nothing.
    fn contains_bound(&self, token: &P::TokenType, is_start: bool) -> bool {
        let after_start = if is_start {
            token >= &self.start
        } else {
            token > &self.start
        };
        let before_end = self.end.is_min_token()
            || if is_start {
                token < &self.end
            } else {
                token <= &self.end
            };
        if self.is_wrapped_around() {
            after_start || before_end
        } else {
            after_start && before_end
        }
    }

    /// Whether the two ranges share at least one token. Empty ranges intersect
    /// nothing.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.contains_bound(&other.start, true)
            || self.contains_bound(&other.end, false)
            || other.contains_bound(&self.start, true)
            || other.contains_bound(&self.end, false)
    }

    /// The ranges covering the tokens common to both ranges.
    ///
    /// Usually one range; two when wrapped ranges overlap at both ends.
    ///
    /// # Errors
    ///
    /// [`Error::NoIntersection`] if the ranges do not intersect.
    pub fn intersect_with(&self, other: &Self) -> Result<Vec<Self>> {
        if !self.intersects(other) {
            return Err(Error::NoIntersection(format!("{} and {}", self, other)));
        }

        let mut pieces = Vec::with_capacity(2);
        for mine in self.unwrap() {
            for theirs in other.unwrap() {
                if mine.intersects(&theirs) {
                    let start = if mine.contains_bound(&theirs.start, true) {
                        theirs.start.clone()
                    } else {
                        mine.start.clone()
                    };
                    let end = if mine.contains_bound(&theirs.end, false) {
                        theirs.end.clone()
                    } else {
                        mine.end.clone()
                    };
                    pieces.push(self.with_bounds(start, end));
                }
            }
        }

        // Pieces meeting at the minimum token belong to one wrapped range.
        let tail = pieces
            .iter()
            .position(|p| p.end.is_min_token() && !p.start.is_min_token());
        let head = pieces
            .iter()
            .position(|p| p.start.is_min_token() && !p.end.is_min_token());
        if let (Some(tail), Some(head)) = (tail, head) {
            let joined = self.with_bounds(pieces[tail].start.clone(), pieces[head].end.clone());
            let mut rest: Vec<Self> = pieces
                .into_iter()
                .enumerate()
                .filter(|(i, _)| *i != tail && *i != head)
                .map(|(_, p)| p)
                .collect();
            rest.insert(0, joined);
            return Ok(rest);
        }
        Ok(pieces)
    }

    /// Merges two ranges that intersect or are adjacent.
    ///
    /// # Errors
    ///
    /// [`Error::NotMergeable`] if the result would include tokens belonging
    /// to neither range.
    pub fn merge_with(&self, other: &Self) -> Result<Self> {
        if self == other {
            return Ok(self.clone());
        }
        if !(self.intersects(other) || self.end == other.start || other.end == self.start) {
            return Err(Error::NotMergeable(format!(
                "{} and {} neither intersect nor are adjacent",
                self, other
            )));
        }
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.is_full_ring() || other.is_full_ring() {
            return Ok(Self::full_ring(self.partitioner));
        }

        // A start is "in" the other range when it lies strictly after the other
        // start, up to and including the other end. Equal starts are in neither.
        let self_starts_in_other = other.contains_bound(&self.start, false) || self.start == other.end;
        let other_starts_in_self = self.contains_bound(&other.start, false) || other.start == self.end;

        if self_starts_in_other && other_starts_in_self {
            debug!(a = %self, b = %other, "ranges cover the ring, merging into full ring");
            return Ok(Self::full_ring(self.partitioner));
        }

        // Keep the upstream start, then the downstream end.
        let start = if self_starts_in_other {
            other.start.clone()
        } else {
            self.start.clone()
        };
        let other_ends_in_self = self.contains_bound(&other.end, false) || other.end == self.start;
        let end = if other_ends_in_self {
            self.end.clone()
        } else {
            other.end.clone()
        };
        Ok(self.with_bounds(start, end))
    }

    /// Splits the range into `n` contiguous ranges of (nearly) equal width, in
    /// ring order from `start`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSplit`] if `start == end` (including the empty range
    /// and the full ring) or `n == 0`.
    pub fn split_evenly(&self, n: usize) -> Result<Vec<Self>> {
        let points = self.partitioner.split(&self.start, &self.end, n)?;

        let mut ranges = Vec::with_capacity(n);
        let mut split_start = self.start.clone();
        for split_end in points {
            ranges.push(self.with_bounds(split_start, split_end.clone()));
            split_start = split_end;
        }
        ranges.push(self.with_bounds(split_start, self.end.clone()));
        Ok(ranges)
    }

    /// The comparison-based queries that together scan exactly this range.
    pub fn scan_bounds(&self) -> Vec<ScanBound<P::TokenType>> {
        if self.is_empty() {
            Vec::new()
        } else if self.end.is_min_token() {
            vec![ScanBound::After(self.start.clone())]
        } else if self.start < self.end {
            vec![ScanBound::Between(self.start.clone(), self.end.clone())]
        } else {
            vec![
                ScanBound::After(self.start.clone()),
                ScanBound::AtMost(self.end.clone()),
            ]
        }
    }
}

impl<P: Partitioner> PartialEq for TokenRange<P> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<P: Partitioner> Eq for TokenRange<P> {}

impl<P: Partitioner> Hash for TokenRange<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<P: Partitioner> PartialOrd for TokenRange<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by start, then end.
impl<P: Partitioner> Ord for TokenRange<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<P: Partitioner> fmt::Debug for TokenRange<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("partitioner", &self.partitioner.name())
            .finish()
    }
}

impl<P: Partitioner> fmt::Display for TokenRange<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.start, self.end)
    }
}
