// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # IntervalUnion
//!
//! [`IntervalUnion`] represents the set union of several [`Interval`]s. It is
//! kept in canonical form at all times: members are sorted ascending by left
//! endpoint, pairwise disjoint, never merely touching, and never empty. Every
//! constructor and operation re-canonicalizes, so two unions cover the same
//! points exactly when their member lists are identical.
//!
//! Union-union intersection uses a keypoint sweep: all endpoints of both
//! operands are sorted into one sequence, each consecutive pair forms a
//! candidate interval, and a candidate survives if both operands fully
//! contain it.

use crate::{Interval, IntervalError, IntervalLike};
use smallvec::SmallVec;
use std::fmt;

/// Inline space for two members: the smallest union that cannot collapse to
/// a single interval.
type Members<T> = SmallVec<[Interval<T>; 2]>;

/// A canonical union of disjoint, non-adjacent, non-empty [`Interval`]s.
///
/// Operations are pure: `union` and `intersection` leave both operands
/// untouched and return fresh values. The only mutating entry point is
/// [`IntervalUnion::insert`], which restores canonical form before
/// returning.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct IntervalUnion<T> {
    intervals: Members<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntervalUnion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntervalUnion(")?;
        f.debug_list().entries(self.intervals.iter()).finish()?;
        f.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for IntervalUnion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ival) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ival}")?;
        }
        f.write_str("]")
    }
}

impl<T> Default for IntervalUnion<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntervalUnion<T> {
    /// Creates the empty union.
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: SmallVec::new(),
        }
    }

    /// Returns whether this union covers no points at all.
    ///
    /// Canonical form holds no empty members, so this is equivalent to
    /// having no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of member intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// The member with the smallest left endpoint.
    #[must_use]
    pub fn first(&self) -> Option<&Interval<T>> {
        self.intervals.first()
    }

    /// The member with the largest left endpoint.
    #[must_use]
    pub fn last(&self) -> Option<&Interval<T>> {
        self.intervals.last()
    }

    /// Iterator over the members, in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }
}

impl<T: Ord> IntervalUnion<T> {
    /// Returns whether `ival` lies entirely within a *single* member of this
    /// union.
    ///
    /// Because members are canonical (separated by real gaps), a contiguous
    /// interval covered by the union as a whole is always covered by exactly
    /// one member, so this is the full subset test for one interval against
    /// a union. The empty interval is contained in any union.
    #[must_use]
    pub fn contains_interval(&self, ival: &Interval<T>) -> bool {
        ival.is_empty() || self.iter().any(|member| ival.is_subset_of(member))
    }

    /// Returns whether `value` is covered by any member.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        // members are sorted and disjoint, so binary search for the first
        // member that does not end before `value`
        let p = self
            .intervals
            .partition_point(|m| matches!(m.right(), Some(right) if right < value));
        self.intervals.get(p).is_some_and(|m| m.contains(value))
    }

    /// Returns whether every member of `self` is covered by `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|member| other.contains_interval(member))
    }
}

impl<T: Ord + Clone> IntervalUnion<T> {
    /// Builds a canonical union from any collection of intervals.
    ///
    /// Empty members are dropped, the rest are sorted and merged. The result
    /// may have fewer members than the input, down to none at all.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval<T>>) -> Self {
        let mut intervals: Members<T> = intervals
            .into_iter()
            .filter(|ival| !ival.is_empty())
            .collect();
        simplify(&mut intervals);
        Self { intervals }
    }

    /// Builds a union from raw endpoint slices.
    ///
    /// Each slice must either be empty (denoting the empty interval, which
    /// vanishes during canonicalization) or hold exactly a `[left, right]`
    /// pair, validated by [`Interval::new`]. Anything else fails with
    /// [`IntervalError::InvalidUnionInput`].
    pub fn from_slices<S>(slices: impl IntoIterator<Item = S>) -> Result<Self, IntervalError>
    where
        S: AsRef<[T]>,
    {
        let mut intervals = Members::new();
        for slice in slices {
            match slice.as_ref() {
                [] => {}
                [left, right] => intervals.push(Interval::new(left.clone(), right.clone())?),
                other => {
                    return Err(IntervalError::InvalidUnionInput { len: other.len() });
                }
            }
        }
        simplify(&mut intervals);
        Ok(Self { intervals })
    }

    /// Adds one interval to this union, restoring canonical form.
    pub fn insert(&mut self, ival: Interval<T>) {
        if ival.is_empty() {
            return;
        }
        self.intervals.push(ival);
        simplify(&mut self.intervals);
    }

    /// Returns the set union of two unions.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_intervals(self.iter().chain(other.iter()).cloned())
    }

    /// Clips this union to a single interval window.
    ///
    /// Every member is intersected with `window`; members that fall entirely
    /// outside leave empty intermediates behind, which canonicalization
    /// drops.
    #[must_use]
    pub fn intersect_interval(&self, window: &Interval<T>) -> Self {
        Self::from_intervals(self.iter().map(|ival| ival.intersection(window)))
    }

    /// Returns the set intersection of two unions via a keypoint sweep.
    ///
    /// The endpoints of both operands, sorted, cut the line into candidate
    /// intervals; a candidate belongs to the intersection exactly when both
    /// operands contain it.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut keypoints: Vec<&T> = self.keypoints().chain(other.keypoints()).collect();
        keypoints.sort_unstable();

        let mut kept = Members::new();
        for pair in keypoints.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let candidate = match Interval::new(left.clone(), right.clone()) {
                Ok(ival) => ival,
                Err(_) => unreachable!("keypoints are sorted, so every candidate is ordered"),
            };
            if self.contains_interval(&candidate) && other.contains_interval(&candidate) {
                kept.push(candidate);
            }
        }
        Self::from_intervals(kept)
    }

    /// All endpoint values of this union, in member order.
    fn keypoints(&self) -> impl Iterator<Item = &T> {
        self.iter()
            .filter_map(|ival| ival.endpoints())
            .flat_map(|(left, right)| [left, right])
    }

    /// Converts into the [`IntervalLike`] sum, collapsing degenerate shapes.
    ///
    /// A union of zero members becomes the empty [`Interval`], a union of
    /// one member becomes that member.
    #[must_use]
    pub fn collapse(self) -> IntervalLike<T> {
        let mut intervals = self.intervals;
        match intervals.len() {
            0 => IntervalLike::Interval(Interval::empty()),
            1 => IntervalLike::Interval(intervals.remove(0)),
            _ => IntervalLike::Union(Self { intervals }),
        }
    }
}

/// Canonicalization: drop empties, sort by left endpoint, then greedily merge
/// each interval into the previous run whenever they overlap or touch.
fn simplify<T: Ord + Clone>(intervals: &mut Members<T>) {
    intervals.retain(|ival| !ival.is_empty());
    if intervals.len() <= 1 {
        return;
    }
    intervals.sort_by(|a, b| a.left().cmp(&b.left()));

    let mut merged: Members<T> = Members::with_capacity(intervals.len());
    for ival in intervals.drain(..) {
        match merged.last_mut() {
            Some(last) => match last.merge(&ival) {
                Some(joined) => *last = joined,
                // a real gap: start a new run
                None => merged.push(ival),
            },
            None => merged.push(ival),
        }
    }
    *intervals = merged;
}

impl<T: Ord + Clone> FromIterator<Interval<T>> for IntervalUnion<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<T: Ord + Clone> Extend<Interval<T>> for IntervalUnion<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for ival in iter {
            self.insert(ival);
        }
    }
}

impl<T: Ord + Clone> From<Interval<T>> for IntervalUnion<T> {
    fn from(ival: Interval<T>) -> Self {
        Self::from_intervals([ival])
    }
}

impl<'a, T> IntoIterator for &'a IntervalUnion<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn canonicalizes_on_construction() {
        let u = IntervalUnion::from_slices([[4, 6], [1, 2], [2, 3], [5, 8]]).unwrap();
        assert_eq!(u.len(), 2);
        assert_eq!(u.first(), Some(&Interval::new(1, 3).unwrap()));
        assert_eq!(u.last(), Some(&Interval::new(4, 8).unwrap()));
    }

    #[test]
    fn from_slices_validates() {
        assert_eq!(
            IntervalUnion::from_slices([[5, 1]]),
            Err(IntervalError::InvalidRange)
        );
        let bad: Vec<Vec<i32>> = vec![vec![1, 2, 3]];
        assert_eq!(
            IntervalUnion::from_slices(bad),
            Err(IntervalError::InvalidUnionInput { len: 3 })
        );

        // zero-length slices denote empty intervals and vanish
        let with_empties: Vec<Vec<i32>> = vec![vec![], vec![1, 2], vec![]];
        let u = IntervalUnion::from_slices(with_empties).unwrap();
        assert_eq!(u.len(), 1);
        assert!(!u.is_empty());
    }

    #[test]
    fn empty_union() {
        let u = IntervalUnion::<i32>::new();
        assert!(u.is_empty());
        assert_eq!(u.len(), 0);
        assert_eq!(u.first(), None);
        assert_eq!(u.last(), None);
        assert_eq!(u.to_string(), "[]");

        // an all-empty construction is the empty union as well
        let v = IntervalUnion::from_intervals([Interval::<i32>::empty(), Interval::empty()]);
        assert!(v.is_empty());
        assert_eq!(u, v);
    }

    #[test]
    fn simplification_is_idempotent() {
        let once = IntervalUnion::from_slices([[1, 2], [2, 3], [7, 9]]).unwrap();
        let twice = IntervalUnion::from_intervals(once.iter().cloned());
        assert_eq!(once, twice);
        assert_eq!(
            once.iter().collect::<Vec<_>>(),
            twice.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn insert_keeps_canonical_form() {
        let mut u = IntervalUnion::from_slices([[1, 2], [5, 6]]).unwrap();
        u.insert(Interval::new(2, 5).unwrap());
        assert_eq!(u.len(), 1);
        assert_eq!(u.first(), Some(&Interval::new(1, 6).unwrap()));

        u.insert(Interval::empty());
        assert_eq!(u.len(), 1);

        u.insert(Interval::new(8, 9).unwrap());
        assert_eq!(u.len(), 2);
    }

    #[test]
    fn union_merges_members() {
        let a = IntervalUnion::from_slices([[1, 2], [8, 9]]).unwrap();
        let b = IntervalUnion::from_slices([[2, 4]]).unwrap();
        let joined = a.union(&b);
        assert_eq!(joined, IntervalUnion::from_slices([[1, 4], [8, 9]]).unwrap());

        // operands are untouched
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn intersect_interval_clips_members() {
        let u = IntervalUnion::from_slices([[0, 2], [4, 6], [8, 10]]).unwrap();
        let clipped = u.intersect_interval(&Interval::new(1, 5).unwrap());
        assert_eq!(clipped, IntervalUnion::from_slices([[1, 2], [4, 5]]).unwrap());

        assert!(u.intersect_interval(&Interval::empty()).is_empty());
    }

    #[test]
    fn sweep_intersection() {
        let a = IntervalUnion::from_slices([[0, 2], [4, 6]]).unwrap();
        let b = IntervalUnion::from_slices([[1, 5]]).unwrap();
        let expected = IntervalUnion::from_slices([[1, 2], [4, 5]]).unwrap();
        assert_eq!(a.intersection(&b), expected);
        assert_eq!(b.intersection(&a), expected);

        assert!(a.intersection(&IntervalUnion::new()).is_empty());
        assert_eq!(a.intersection(&a), a);
    }

    #[test]
    fn subset_and_containment() {
        let u = IntervalUnion::from_slices([[1, 2], [4, 6]]).unwrap();
        assert!(u.contains_interval(&Interval::new(4, 5).unwrap()));
        assert!(u.contains_interval(&Interval::empty()));
        // spanning the gap between two members is not containment
        assert!(!u.contains_interval(&Interval::new(1, 5).unwrap()));

        let wider = IntervalUnion::from_slices([[0, 3], [4, 9]]).unwrap();
        assert!(u.is_subset_of(&wider));
        assert!(!wider.is_subset_of(&u));
        assert!(IntervalUnion::<i32>::new().is_subset_of(&u));

        assert!(u.contains(&1));
        assert!(u.contains(&5));
        assert!(!u.contains(&0));
        assert!(!u.contains(&3));
        assert!(!u.contains(&7));
    }

    #[test]
    fn collapse_degenerate_shapes() {
        assert_eq!(
            IntervalUnion::<i32>::new().collapse(),
            IntervalLike::Interval(Interval::empty())
        );
        assert_eq!(
            IntervalUnion::from_slices([[1, 2], [2, 4]]).unwrap().collapse(),
            IntervalLike::Interval(Interval::new(1, 4).unwrap())
        );
        assert!(
            IntervalUnion::from_slices([[1, 2], [4, 5]])
                .unwrap()
                .collapse()
                .is_union()
        );
    }

    #[test]
    fn display_and_debug() {
        let u = IntervalUnion::from_slices([[1, 2], [4, 6]]).unwrap();
        assert_eq!(u.to_string(), "[[1, 2], [4, 6]]");
        assert_eq!(
            format!("{u:?}"),
            "IntervalUnion([Interval(1, 2), Interval(4, 6)])"
        );
    }

    /// Builds a canonical union from arbitrary (possibly reversed) byte
    /// pairs, widened to `i32` so the coverage grid below cannot overflow.
    fn build(pairs: &[(u8, u8)]) -> IntervalUnion<i32> {
        pairs
            .iter()
            .map(|&(a, b)| {
                let (left, right) = (i32::from(a.min(b)), i32::from(a.max(b)));
                Interval::new(left, right).unwrap()
            })
            .collect()
    }

    /// Reference point-set model on a half-unit grid (endpoints doubled).
    ///
    /// Closed intervals with integer endpoints are fully characterized by
    /// the half-integers they cover: every gap and every degenerate overlap
    /// contains at least one grid point.
    fn coverage(u: &IntervalUnion<i32>) -> HashSet<i32> {
        u.iter()
            .flat_map(|ival| {
                let (left, right) = ival.endpoints().expect("canonical unions have no empty members");
                (2 * left)..=(2 * right)
            })
            .collect()
    }

    #[quickcheck]
    fn qc_union_matches_point_model(left: Vec<(u8, u8)>, right: Vec<(u8, u8)>) {
        let (a, b) = (build(&left), build(&right));
        let joined = a.union(&b);
        let expected: HashSet<i32> = coverage(&a).union(&coverage(&b)).copied().collect();
        assert_eq!(coverage(&joined), expected);
    }

    #[quickcheck]
    fn qc_intersection_matches_point_model(left: Vec<(u8, u8)>, right: Vec<(u8, u8)>) {
        let (a, b) = (build(&left), build(&right));
        let common = a.intersection(&b);
        let expected: HashSet<i32> = coverage(&a)
            .intersection(&coverage(&b))
            .copied()
            .collect();
        assert_eq!(coverage(&common), expected);
    }

    #[quickcheck]
    fn qc_subset_matches_point_model(left: Vec<(u8, u8)>, right: Vec<(u8, u8)>) {
        let (a, b) = (build(&left), build(&right));
        assert_eq!(a.is_subset_of(&b), coverage(&a).is_subset(&coverage(&b)));
    }

    #[quickcheck]
    fn qc_equality_matches_point_model(left: Vec<(u8, u8)>, right: Vec<(u8, u8)>) {
        let (a, b) = (build(&left), build(&right));
        assert_eq!(a == b, coverage(&a) == coverage(&b));
    }

    #[quickcheck]
    fn qc_contains_agrees_with_members(pairs: Vec<(u8, u8)>, probe: u8) {
        let u = build(&pairs);
        let probe = i32::from(probe);
        assert_eq!(
            u.contains(&probe),
            u.iter().any(|member| member.contains(&probe))
        );
    }

    #[quickcheck]
    fn qc_canonical_form_is_stable(pairs: Vec<(u8, u8)>) {
        let once = build(&pairs);
        let twice = IntervalUnion::from_intervals(once.iter().cloned());
        assert_eq!(
            once.iter().collect::<Vec<_>>(),
            twice.iter().collect::<Vec<_>>()
        );
        // members are sorted, disjoint and separated by real gaps
        for window in once.iter().collect::<Vec<_>>().windows(2) {
            assert!(window[0].merge(window[1]).is_none());
        }
    }
}
