// (c) Copyright 2025 Helsing GmbH. All rights reserved.
/// Convenience macro for creating [`Interval`](crate::Interval) values.
///
/// NOTE! This is mostly useful for tests and initialization: an out-of-order
/// endpoint pair panics instead of surfacing the
/// [`IntervalError`](crate::IntervalError) that the checked constructor
/// returns.
///
/// ```rust
/// use interval_algebra::{Interval, interval};
///
/// let empty: Interval<i32> = interval!();
/// assert!(empty.is_empty());
///
/// assert_eq!(interval!(7), Interval::point(7));
/// assert_eq!(interval!(1, 5), Interval::new(1, 5).unwrap());
/// ```
#[macro_export]
macro_rules! interval {
    () => {
        $crate::Interval::empty()
    };
    ($value:expr) => {
        $crate::Interval::point($value)
    };
    ($left:expr, $right:expr) => {
        match $crate::Interval::new($left, $right) {
            Ok(ival) => ival,
            Err(err) => panic!("bad interval literal: {err}"),
        }
    };
}

/// Convenience macro for creating an [`IntervalUnion`](crate::IntervalUnion)
/// from endpoint pairs.
///
/// Each element is an `[left, right]` pair handed to [`interval!`]; a bare
/// `[]` denotes the empty interval, which vanishes during canonicalization.
///
/// ```rust
/// use interval_algebra::{interval, interval_union};
///
/// let maintenance = interval_union![[1, 2], [2, 3], [7, 9]];
/// assert_eq!(maintenance.len(), 2);
/// assert!(maintenance.contains_interval(&interval!(1, 3)));
/// ```
#[macro_export]
macro_rules! interval_union {
    ($([$($endpoint:expr),*]),* $(,)?) => {
        $crate::IntervalUnion::from_intervals([$($crate::interval!($($endpoint),*)),*])
    };
}
