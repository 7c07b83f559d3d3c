// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! `quickcheck::Arbitrary` implementations for the interval types, used by
//! the crate's own property tests and exposed through the `arbitrary`
//! feature.

use crate::{Interval, IntervalUnion};
use quickcheck::{Arbitrary, Gen};

/// Orders two endpoints into a valid interval.
fn ordered<T: Ord>(a: T, b: T) -> Interval<T> {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    Interval::new(left, right).unwrap_or_else(|_| unreachable!("endpoints are ordered"))
}

impl<T: Arbitrary + Ord> Arbitrary for Interval<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        match Option::<(T, T)>::arbitrary(g) {
            None => Self::empty(),
            Some((a, b)) => ordered(a, b),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self.endpoints() {
            None => quickcheck::empty_shrinker(),
            Some((left, right)) => {
                let seed = (left.clone(), right.clone());
                Box::new(
                    std::iter::once(Self::empty())
                        .chain(seed.shrink().map(|(a, b)| ordered(a, b))),
                )
            }
        }
    }
}

impl<T: Arbitrary + Ord> Arbitrary for IntervalUnion<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<Interval<T>>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let members: Vec<Interval<T>> = self.iter().cloned().collect();
        Box::new(members.shrink().map(|members| members.into_iter().collect()))
    }
}
