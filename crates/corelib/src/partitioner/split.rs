//! Split algorithm shared by all partitioners.
//!
//! Each partitioner maps its tokens to integers, computes the width of the arc
//! and hands both to [`split_range`]. The integer type is the partitioner's
//! choice: `i128` is wide enough for Murmur3, the others need `BigInt`.

use num_integer::Integer;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};

/// Ring constants used to wrap split points back past the ring maximum.
#[derive(Debug, Clone)]
pub(crate) struct RingBounds<T> {
    /// Largest value on the ring.
    pub end: T,
    /// Number of positions on the ring.
    pub length: T,
}

/// Largest split count accepted, the range of a CQL `int`.
pub const MAX_SPLITS: usize = i32::MAX as usize;

/// Rejects split requests no partitioner can serve.
pub(crate) fn check_split_request(bounds_equal: bool, n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidSplit("number of splits must be greater than 0".into()));
    }
    if n > MAX_SPLITS {
        return Err(Error::InvalidSplit(format!(
            "{} splits exceeds the maximum of {}",
            n, MAX_SPLITS
        )));
    }
    if bounds_equal {
        return Err(Error::InvalidSplit("cannot split range with equal bounds".into()));
    }
    Ok(())
}

/// Width of the arc `(start, end]`, adding the ring length when it wraps.
pub(crate) fn arc_width<T: Integer + Clone>(start: &T, end: &T, ring_length: &T) -> T {
    let width = end.clone() - start.clone();
    if width < T::zero() {
        width + ring_length.clone()
    } else {
        width
    }
}

/// Returns the `n - 1` interior points splitting an arc of `width` positions
/// starting after `start` into `n` parts.
///
/// The first `width % n` parts are one position wider than the rest. Points
/// above `ring.end` are wrapped by subtracting `ring.length`; `None` means the
/// arc never crosses the ring maximum.
pub(crate) fn split_range<T>(start: T, width: T, ring: Option<&RingBounds<T>>, n: usize) -> Result<Vec<T>>
where
    T: Integer + Clone + FromPrimitive,
{
    let parts = T::from_usize(n)
        .ok_or_else(|| Error::InvalidSplit(format!("{} splits do not fit the ring arithmetic", n)))?;
    let (divider, mut remainder) = width.div_rem(&parts);

    let mut points = Vec::with_capacity(n.saturating_sub(1));
    let mut current = start;
    for _ in 1..n {
        let step = if remainder > T::zero() {
            remainder = remainder - T::one();
            divider.clone() + T::one()
        } else {
            divider.clone()
        };
        current = current + step;
        if let Some(ring) = ring {
            if current > ring.end {
                current = current - ring.length.clone();
            }
        }
        points.push(current.clone());
    }
    Ok(points)
}
