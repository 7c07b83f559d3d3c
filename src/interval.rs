// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval
//!
//! This module provides [`Interval`], a single closed range `[left, right]`
//! over any totally ordered endpoint type, plus the canonical empty interval.
//!
//! An `Interval` is a value: all set operations are pure and return fresh
//! objects. Combining two intervals whose union is not contiguous produces an
//! [`IntervalUnion`], which is why [`Interval::union`] returns the
//! [`IntervalLike`] sum of both shapes.
//!
//! Endpoints only need to implement [`Ord`]. Integers, dates, and strings all
//! work; no numeric operations are ever performed on them.

use crate::{IntervalLike, IntervalUnion};
use std::fmt;

/// Error returned when constructing an [`Interval`] or [`IntervalUnion`] from
/// invalid endpoints.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum IntervalError {
    /// The left endpoint was greater than the right endpoint.
    InvalidRange,

    /// Exactly one of the two endpoints was unset. An interval is either
    /// empty (both endpoints unset) or bounded on both sides.
    InconsistentEndpoints,

    /// A raw endpoint slice passed to [`IntervalUnion::from_slices`] was
    /// neither empty nor a `[left, right]` pair.
    InvalidUnionInput {
        /// Number of endpoints the offending slice held.
        len: usize,
    },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::InvalidRange => {
                write!(f, "left endpoint must not be greater than right endpoint")
            }
            IntervalError::InconsistentEndpoints => {
                write!(f, "either both endpoints must be set, or neither")
            }
            IntervalError::InvalidUnionInput { len } => {
                write!(
                    f,
                    "expected an empty slice or a [left, right] pair, got {len} endpoints"
                )
            }
        }
    }
}

impl std::error::Error for IntervalError {}

/// A closed interval `[left, right]`, or the empty interval.
///
/// The empty interval carries no endpoints at all, so the inconsistent state
/// "one endpoint set, the other unset" is not representable. It can only be
/// asked for through [`Interval::from_endpoints`], which rejects it with
/// [`IntervalError::InconsistentEndpoints`].
///
/// Equality is extensional: two intervals are equal exactly when they cover
/// the same points, which for single closed intervals coincides with having
/// the same endpoints. Cross-type equality against [`IntervalUnion`] is
/// provided as well, so `Interval::new(1, 3)? == interval_union![[1, 2], [2, 3]]`
/// holds.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct Interval<T> {
    /// `None` for the empty interval, `Some((left, right))` with
    /// `left <= right` otherwise.
    #[cfg_attr(
        feature = "serde",
        serde(default = "Option::default", skip_serializing_if = "Option::is_none")
    )]
    bounds: Option<(T, T)>,
}

impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bounds {
            None => write!(f, "Interval()"),
            Some((left, right)) => write!(f, "Interval({left:?}, {right:?})"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bounds {
            None => f.write_str("[]"),
            Some((left, right)) => write!(f, "[{left}, {right}]"),
        }
    }
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Interval<T> {
    /// Creates the canonical empty interval.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Returns whether this interval covers no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// The left (lower) endpoint, or `None` for the empty interval.
    #[must_use]
    pub fn left(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(left, _)| left)
    }

    /// The right (upper) endpoint, or `None` for the empty interval.
    #[must_use]
    pub fn right(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(_, right)| right)
    }

    /// Both endpoints at once, or `None` for the empty interval.
    #[must_use]
    pub fn endpoints(&self) -> Option<(&T, &T)> {
        self.bounds.as_ref().map(|(left, right)| (left, right))
    }

    /// Consumes the interval and returns its endpoints.
    #[must_use]
    pub fn into_endpoints(self) -> Option<(T, T)> {
        self.bounds
    }
}

impl<T: Clone> Interval<T> {
    /// Creates the degenerate interval `[value, value]` covering one point.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            bounds: Some((value.clone(), value)),
        }
    }
}

impl<T: Ord> Interval<T> {
    /// Creates a new interval spanning `[left, right]`.
    ///
    /// Fails with [`IntervalError::InvalidRange`] if `left > right`. A
    /// zero-length interval (`left == right`) is fine; see also
    /// [`Self::point`].
    pub fn new(left: T, right: T) -> Result<Self, IntervalError> {
        if left > right {
            Err(IntervalError::InvalidRange)
        } else {
            Ok(Self::span(left, right))
        }
    }

    /// Creates an interval from two optional endpoints.
    ///
    /// Both `None` yields the empty interval; both `Some` behaves like
    /// [`Self::new`]; a mixed pair fails with
    /// [`IntervalError::InconsistentEndpoints`].
    pub fn from_endpoints(left: Option<T>, right: Option<T>) -> Result<Self, IntervalError> {
        match (left, right) {
            (None, None) => Ok(Self::empty()),
            (Some(left), Some(right)) => Self::new(left, right),
            _ => Err(IntervalError::InconsistentEndpoints),
        }
    }

    /// Internal constructor for endpoints already known to be ordered.
    pub(crate) fn span(left: T, right: T) -> Self {
        debug_assert!(left <= right);
        Self {
            bounds: Some((left, right)),
        }
    }

    /// Returns whether `value` lies within this interval (endpoints
    /// included). The empty interval contains nothing.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        match &self.bounds {
            None => false,
            Some((left, right)) => left <= value && value <= right,
        }
    }

    /// Returns whether every point of `self` is also covered by `other`.
    ///
    /// The empty interval is a subset of everything; nothing but the empty
    /// interval is a subset of the empty interval.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        match (&self.bounds, &other.bounds) {
            (None, _) => true,
            (_, None) => false,
            (Some((left, right)), Some((other_left, other_right))) => {
                other_left <= left && right <= other_right
            }
        }
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Combines two intervals into one, if they overlap or touch.
    ///
    /// Touching means sharing an endpoint: `[1, 2]` and `[2, 3]` merge into
    /// `[1, 3]`. If either operand is empty the other is returned unchanged.
    /// If there is a gap between the operands, this returns `None`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let Some((left, right)) = &self.bounds else {
            return Some(other.clone());
        };
        let Some((other_left, other_right)) = &other.bounds else {
            return Some(self.clone());
        };
        // closed-interval contact check: the later start must not lie past
        // the earlier end
        if left.max(other_left) > right.min(other_right) {
            return None;
        }
        Some(Self::span(
            left.min(other_left).clone(),
            right.max(other_right).clone(),
        ))
    }

    /// Returns the set union of two intervals.
    ///
    /// If the operands overlap, touch, or one of them is empty, the result
    /// collapses to a single [`Interval`]. Two disjoint non-adjacent
    /// intervals yield an [`IntervalUnion`] holding both.
    #[must_use]
    pub fn union(&self, other: &Self) -> IntervalLike<T> {
        match self.merge(other) {
            Some(merged) => IntervalLike::Interval(merged),
            None => IntervalLike::Union(IntervalUnion::from_intervals([
                self.clone(),
                other.clone(),
            ])),
        }
    }

    /// Returns the set intersection of two intervals.
    ///
    /// This is always a single interval: empty for disjoint operands, the
    /// degenerate point interval for operands that merely touch.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (Some((left, right)), Some((other_left, other_right))) = (&self.bounds, &other.bounds)
        else {
            return Self::empty();
        };
        let lower = left.max(other_left);
        let upper = right.min(other_right);
        if lower <= upper {
            Self::span(lower.clone(), upper.clone())
        } else {
            Self::empty()
        }
    }
}
