// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! The closed two-variant algebra over [`Interval`] and [`IntervalUnion`].
//!
//! [`IntervalLike`] is the sum of both interval shapes. Set operations whose
//! result shape depends on the operands (a union of two intervals may or may
//! not be contiguous) return it, and its own operations dispatch exhaustively
//! over all four operand combinations, so there is no "unsupported operand"
//! failure mode anywhere in the algebra.

use crate::{Interval, IntervalUnion};
use std::fmt;

/// Either a single [`Interval`] or an [`IntervalUnion`].
///
/// Results are kept collapsed: operations never return a `Union` variant
/// holding fewer than two members.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum IntervalLike<T> {
    /// A single contiguous interval (possibly empty).
    Interval(Interval<T>),
    /// A union of two or more disjoint intervals.
    Union(IntervalUnion<T>),
}

impl<T: fmt::Debug> fmt::Debug for IntervalLike<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interval(ival) => ival.fmt(f),
            Self::Union(union) => union.fmt(f),
        }
    }
}

impl<T: fmt::Display> fmt::Display for IntervalLike<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interval(ival) => ival.fmt(f),
            Self::Union(union) => union.fmt(f),
        }
    }
}

impl<T> From<Interval<T>> for IntervalLike<T> {
    fn from(ival: Interval<T>) -> Self {
        Self::Interval(ival)
    }
}

impl<T> From<IntervalUnion<T>> for IntervalLike<T> {
    fn from(union: IntervalUnion<T>) -> Self {
        Self::Union(union)
    }
}

impl<T> IntervalLike<T> {
    /// Returns whether no points at all are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Interval(ival) => ival.is_empty(),
            Self::Union(union) => union.is_empty(),
        }
    }

    /// Returns whether this is the `Interval` variant.
    #[must_use]
    pub fn is_interval(&self) -> bool {
        matches!(self, Self::Interval(_))
    }

    /// Returns whether this is the `Union` variant.
    #[must_use]
    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    /// The inner [`Interval`], if this is the `Interval` variant.
    #[must_use]
    pub fn as_interval(&self) -> Option<&Interval<T>> {
        match self {
            Self::Interval(ival) => Some(ival),
            Self::Union(_) => None,
        }
    }

    /// The inner [`IntervalUnion`], if this is the `Union` variant.
    #[must_use]
    pub fn as_union(&self) -> Option<&IntervalUnion<T>> {
        match self {
            Self::Interval(_) => None,
            Self::Union(union) => Some(union),
        }
    }
}

impl<T: Ord> IntervalLike<T> {
    /// Returns whether every covered point of `self` is also covered by
    /// `other`.
    ///
    /// Note the containment rule for unions: a member of `self` must fit
    /// inside a *single* member of `other`. Since unions are canonical here
    /// (members separated by real gaps), this coincides with full
    /// subset-of-the-union semantics.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => a.is_subset_of(b),
            (Self::Interval(a), Self::Union(b)) => b.contains_interval(a),
            (Self::Union(a), Self::Interval(b)) => a.iter().all(|member| member.is_subset_of(b)),
            (Self::Union(a), Self::Union(b)) => a.is_subset_of(b),
        }
    }
}

impl<T: Ord + Clone> IntervalLike<T> {
    /// Returns the set union of the two operands.
    ///
    /// The empty set is the identity: `x ∪ ∅ = x`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => a.union(b),
            (Self::Interval(a), Self::Union(b)) | (Self::Union(b), Self::Interval(a)) => {
                let mut joined = b.clone();
                joined.insert(a.clone());
                joined.collapse()
            }
            (Self::Union(a), Self::Union(b)) => a.union(b).collapse(),
        }
    }

    /// Returns the set intersection of the two operands.
    ///
    /// The empty set annihilates: `x ∩ ∅ = ∅`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => Self::Interval(a.intersection(b)),
            (Self::Interval(a), Self::Union(b)) | (Self::Union(b), Self::Interval(a)) => {
                b.intersect_interval(a).collapse()
            }
            (Self::Union(a), Self::Union(b)) => a.intersection(b).collapse(),
        }
    }
}

// Equality throughout the algebra is extensional: `a == b` holds exactly when
// both cover the same points, regardless of which variant or how many members
// represent them.

impl<T: Ord> PartialEq<IntervalUnion<T>> for Interval<T> {
    fn eq(&self, other: &IntervalUnion<T>) -> bool {
        other.contains_interval(self) && other.iter().all(|member| member.is_subset_of(self))
    }
}

impl<T: Ord> PartialEq<Interval<T>> for IntervalUnion<T> {
    fn eq(&self, other: &Interval<T>) -> bool {
        other == self
    }
}

impl<T: Ord> PartialEq for IntervalLike<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Interval(a), Self::Interval(b)) => a == b,
            (Self::Union(a), Self::Union(b)) => a == b,
            (Self::Interval(a), Self::Union(b)) | (Self::Union(b), Self::Interval(a)) => a == b,
        }
    }
}

impl<T: Ord> Eq for IntervalLike<T> {}

impl<T: Ord> PartialEq<Interval<T>> for IntervalLike<T> {
    fn eq(&self, other: &Interval<T>) -> bool {
        match self {
            Self::Interval(a) => a == other,
            Self::Union(a) => a == other,
        }
    }
}

impl<T: Ord> PartialEq<IntervalLike<T>> for Interval<T> {
    fn eq(&self, other: &IntervalLike<T>) -> bool {
        other == self
    }
}

impl<T: Ord> PartialEq<IntervalUnion<T>> for IntervalLike<T> {
    fn eq(&self, other: &IntervalUnion<T>) -> bool {
        match self {
            Self::Interval(a) => a == other,
            Self::Union(a) => a == other,
        }
    }
}

impl<T: Ord> PartialEq<IntervalLike<T>> for IntervalUnion<T> {
    fn eq(&self, other: &IntervalLike<T>) -> bool {
        other == self
    }
}
