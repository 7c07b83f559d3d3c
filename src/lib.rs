// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # interval-algebra
//!
//! A small algebra of closed intervals and unions of closed intervals over
//! any totally ordered endpoint type.
//!
//! ## Core concepts
//!
//! - [`Interval`]: a single closed range `[left, right]` covering both
//!   endpoints, or the canonical empty interval covering nothing.
//! - [`IntervalUnion`]: a set union of intervals, always held in canonical
//!   form (sorted, disjoint, non-adjacent, no empty members).
//! - [`IntervalLike`]: the sum of both shapes. Operations whose result shape
//!   depends on the operands return it, and results are always collapsed to
//!   the simplest shape that fits.
//!
//! All set operations are pure: `union`, `intersection` and `is_subset_of`
//! never mutate their operands.
//!
//! ## Example
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalUnion, interval, interval_union};
//!
//! let shift_a = Interval::new(9, 13)?;
//! let shift_b = Interval::new(13, 17)?;
//!
//! // touching intervals merge into one
//! let day = shift_a.union(&shift_b);
//! assert_eq!(day, interval!(9, 17));
//!
//! // disjoint intervals become a union
//! let on_call = shift_a.union(&Interval::new(20, 22)?);
//! assert!(on_call.is_union());
//! assert_eq!(on_call.to_string(), "[[9, 13], [20, 22]]");
//!
//! // unions canonicalize on construction
//! let cover = interval_union![[1, 2], [2, 3], [7, 9]];
//! assert_eq!(cover.len(), 2);
//! assert!(cover.contains_interval(&interval!(1, 3)));
//!
//! // equality is extensional: same points, same value
//! assert_eq!(interval_union![[1, 2], [2, 3]], interval!(1, 3));
//! # Ok::<(), interval_algebra::IntervalError>(())
//! ```
//!
//! ## Endpoint types
//!
//! Endpoints only need [`Ord`] (plus [`Clone`] for the combining
//! operations); no arithmetic is ever performed on them. Integers, dates,
//! strings and newtypes over any of these all work:
//!
//! ```rust
//! use interval_algebra::Interval;
//!
//! let h1 = Interval::new("2025-01", "2025-06")?;
//! assert!(h1.contains(&"2025-03"));
//! # Ok::<(), interval_algebra::IntervalError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all three types.
//! - `arbitrary`: `quickcheck::Arbitrary` for [`Interval`] and
//!   [`IntervalUnion`], generating valid (canonical) values.

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod algebra;
pub use algebra::IntervalLike;
mod interval;
pub use interval::{Interval, IntervalError};
mod interval_union;
pub use interval_union::IntervalUnion;

// Exports the `interval!` and `interval_union!` literal macros.
mod macros;

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary_impls;
