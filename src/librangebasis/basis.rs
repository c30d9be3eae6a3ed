// Copyright 2026 The rangebasis developers

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Domain of an interval: its bounds and its comparator.
//!
//! A basis is the factory of intervals and the context of every relation between them. Intervals built by a basis must only be related through that basis (or one with the same bounds and comparator).
//!
//! # Examples
//!
//! ```rust
//! use rangebasis::Basis;
//!
//! let basis = Basis::natural(0, 10);
//! let a = basis.closed(1, 3);
//! let b = basis.right_open(3, 5);
//! assert!(basis.overlaps(&a, &b));
//! assert!(basis.before(&basis.right_open(1, 3), &b));
//! assert!(basis.try_left_open(5, 5).is_err());
//! ```
//!
//! A basis over any comparator:
//!
//! ```rust
//! use rangebasis::Basis;
//!
//! let by_length = Basis::new("", "zzzzzzzz", |a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
//! assert!(by_length.contains(&by_length.closed("zz", "aaaa"), &"abc"));
//! ```

use crate::interval::{Interval, Kind};
use crate::ops::{Comparator, Natural};
use log::debug;
use num_traits::Bounded as NumBounded;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug)]
pub struct Basis<T, C = Natural>
{
  min: T,
  max: T,
  cmp: C
}

/// An interval that cannot be built or that does not belong to a basis.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BoundsError<T>
{
  /// The bounds break the ordering rule of the kind: `lower <= upper`, strictly for half-open kinds.
  Misordered { kind: Kind, lower: T, upper: T },
  /// A bound lies outside of `[min, max]`.
  OutsideDomain { kind: Kind, lower: T, upper: T }
}

impl<T> BoundsError<T>
{
  pub fn kind(&self) -> Kind {
    match *self {
      BoundsError::Misordered { kind, .. }
    | BoundsError::OutsideDomain { kind, .. } => kind
    }
  }

  pub fn into_bounds(self) -> (T, T) {
    match self {
      BoundsError::Misordered { lower, upper, .. }
    | BoundsError::OutsideDomain { lower, upper, .. } => (lower, upper)
    }
  }
}

impl<T: Debug> Display for BoundsError<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
    match self {
      BoundsError::Misordered { kind, lower, upper } if kind.is_half_open() =>
        write!(formatter, "Cannot build the {} interval {}{:?}, {:?}{}: the lower bound must be strictly less than the upper bound.",
          kind, kind.left_bracket(), lower, upper, kind.right_bracket()),
      BoundsError::Misordered { kind, lower, upper } =>
        write!(formatter, "Cannot build the {} interval {}{:?}, {:?}{}: the lower bound must be less or equal than the upper bound.",
          kind, kind.left_bracket(), lower, upper, kind.right_bracket()),
      BoundsError::OutsideDomain { kind, lower, upper } =>
        write!(formatter, "The {} interval {}{:?}, {:?}{} does not fit in the domain of the basis.",
          kind, kind.left_bracket(), lower, upper, kind.right_bracket())
    }
  }
}

impl<T: Debug> Error for BoundsError<T> {}

impl<T: Ord> Basis<T, Natural>
{
  pub fn natural(min: T, max: T) -> Basis<T, Natural> {
    Basis::new(min, max, Natural)
  }
}

impl<T: Ord + NumBounded> Basis<T, Natural>
{
  /// The basis covering every value of a bounded primitive type.
  pub fn full() -> Basis<T, Natural> {
    Basis::natural(T::min_value(), T::max_value())
  }
}

impl<T, C> Basis<T, C> where
  C: Comparator<T>
{
  /// `min <= max` must hold under `cmp`, it is not checked.
  pub fn new(min: T, max: T, cmp: C) -> Basis<T, C> {
    Basis { min, max, cmp }
  }

  pub fn min(&self) -> &T {
    &self.min
  }

  pub fn max(&self) -> &T {
    &self.max
  }

  pub fn comparator(&self) -> &C {
    &self.cmp
  }

  pub fn compare(&self, a: &T, b: &T) -> Ordering {
    self.cmp.compare(a, b)
  }

  pub(crate) fn equal(&self, a: &T, b: &T) -> bool {
    self.cmp.equal(a, b)
  }

  fn is_ordered(&self, kind: Kind, lower: &T, upper: &T) -> bool {
    match self.cmp.compare(lower, upper) {
      Ordering::Less => true,
      Ordering::Equal => !kind.is_half_open(),
      Ordering::Greater => false
    }
  }

  pub fn try_interval(&self, kind: Kind, lower: T, upper: T) -> Result<Interval<T>, BoundsError<T>> {
    if self.is_ordered(kind, &lower, &upper) {
      Ok(Interval::new_unchecked(kind, lower, upper))
    }
    else {
      debug!("{} interval rejected: bounds out of order", kind);
      Err(BoundsError::Misordered { kind, lower, upper })
    }
  }

  /// `(lower, upper)`, `lower == upper` gives the empty interval.
  pub fn try_open(&self, lower: T, upper: T) -> Result<Interval<T>, BoundsError<T>> {
    self.try_interval(Kind::Open, lower, upper)
  }

  /// `(lower, upper]`
  pub fn try_left_open(&self, lower: T, upper: T) -> Result<Interval<T>, BoundsError<T>> {
    self.try_interval(Kind::LeftOpen, lower, upper)
  }

  /// `[lower, upper)`
  pub fn try_right_open(&self, lower: T, upper: T) -> Result<Interval<T>, BoundsError<T>> {
    self.try_interval(Kind::RightOpen, lower, upper)
  }

  /// `[lower, upper]`, `lower == upper` gives a single point.
  pub fn try_closed(&self, lower: T, upper: T) -> Result<Interval<T>, BoundsError<T>> {
    self.try_interval(Kind::Closed, lower, upper)
  }

  /// `true` if `i1` ends before `i2` starts, i.e. no point of `i1` is greater or equal than a point of `i2`.
  pub fn before(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    if i1.upper_included() && i2.lower_included() {
      self.cmp.less(i1.upper(), i2.lower())
    }
    else {
      self.cmp.less_eq(i1.upper(), i2.lower())
    }
  }

  /// `true` if `i1` starts after `i2` ends.
  pub fn after(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    if i1.lower_included() && i2.upper_included() {
      self.cmp.less(i2.upper(), i1.lower())
    }
    else {
      self.cmp.less_eq(i2.upper(), i1.lower())
    }
  }

  /// `true` if `i1` starts no later than `i2`. On equal lower bounds, an included bound starts before an excluded one.
  pub fn starts_before(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    match self.cmp.compare(i1.lower(), i2.lower()) {
      Ordering::Less => true,
      Ordering::Greater => false,
      Ordering::Equal => i1.lower_included() || !i2.lower_included()
    }
  }

  /// `true` if `i1` ends no earlier than `i2`. On equal upper bounds, an included bound ends after an excluded one.
  pub fn ends_after(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    match self.cmp.compare(i1.upper(), i2.upper()) {
      Ordering::Greater => true,
      Ordering::Less => false,
      Ordering::Equal => i1.upper_included() || !i2.upper_included()
    }
  }

  pub fn is_disjoint(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    self.before(i1, i2) || self.after(i1, i2)
  }

  pub fn overlaps(&self, i1: &Interval<T>, i2: &Interval<T>) -> bool {
    !self.is_disjoint(i1, i2)
  }

  pub fn contains(&self, i: &Interval<T>, value: &T) -> bool {
    let above_lower =
      if i.lower_included() { self.cmp.less_eq(i.lower(), value) }
      else { self.cmp.less(i.lower(), value) };
    let below_upper =
      if i.upper_included() { self.cmp.less_eq(value, i.upper()) }
      else { self.cmp.less(value, i.upper()) };
    above_lower && below_upper
  }

  /// Only the open interval `(x, x)` is empty.
  pub fn is_empty(&self, i: &Interval<T>) -> bool {
    i.is_open() && self.cmp.equal(i.lower(), i.upper())
  }

  /// `true` if both bounds of `i` lie in `[min, max]`.
  pub fn admits(&self, i: &Interval<T>) -> bool {
    self.cmp.less_eq(&self.min, i.lower()) && self.cmp.less_eq(i.upper(), &self.max)
  }
}

impl<T, C> Basis<T, C> where
  C: Comparator<T> + PartialEq
{
  /// Equal comparators and the same bounds under that comparator. Intervals of `self` can be related through `other`.
  pub fn is_equivalent(&self, other: &Basis<T, C>) -> bool {
    self.cmp == other.cmp
      && self.cmp.equal(&self.min, &other.min)
      && self.cmp.equal(&self.max, &other.max)
  }
}

impl<T, C> Basis<T, C> where
  T: Clone,
  C: Comparator<T>
{
  /// Validates an interval that was not built by this basis, for example a deserialized one.
  pub fn check(&self, i: &Interval<T>) -> Result<(), BoundsError<T>> {
    let kind = i.kind();
    let error =
      if !self.is_ordered(kind, i.lower(), i.upper()) {
        BoundsError::Misordered { kind, lower: i.lower().clone(), upper: i.upper().clone() }
      }
      else if !self.admits(i) {
        BoundsError::OutsideDomain { kind, lower: i.lower().clone(), upper: i.upper().clone() }
      }
      else {
        return Ok(());
      };
    debug!("{} interval failed the basis check", kind);
    Err(error)
  }

  pub fn point(&self, value: T) -> Interval<T> {
    Interval::new_unchecked(Kind::Closed, value.clone(), value)
  }

  /// `[min, max]`
  pub fn whole(&self) -> Interval<T> {
    Interval::new_unchecked(Kind::Closed, self.min.clone(), self.max.clone())
  }

  /// The canonical empty interval `(min, min)`.
  pub fn empty(&self) -> Interval<T> {
    Interval::new_unchecked(Kind::Open, self.min.clone(), self.min.clone())
  }
}

impl<T, C> Basis<T, C> where
  T: Debug,
  C: Comparator<T>
{
  /// # Panics
  ///
  /// Panics if the bounds break the ordering rule of `kind`, see [`try_interval`](#method.try_interval) for the checked version.
  pub fn interval(&self, kind: Kind, lower: T, upper: T) -> Interval<T> {
    match self.try_interval(kind, lower, upper) {
      Ok(i) => i,
      Err(e) => panic!("{}", e)
    }
  }

  pub fn open(&self, lower: T, upper: T) -> Interval<T> {
    self.interval(Kind::Open, lower, upper)
  }

  pub fn left_open(&self, lower: T, upper: T) -> Interval<T> {
    self.interval(Kind::LeftOpen, lower, upper)
  }

  pub fn right_open(&self, lower: T, upper: T) -> Interval<T> {
    self.interval(Kind::RightOpen, lower, upper)
  }

  pub fn closed(&self, lower: T, upper: T) -> Interval<T> {
    self.interval(Kind::Closed, lower, upper)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use test_log::test;

  fn basis() -> Basis<i32> {
    Basis::natural(0, 10)
  }

  #[test]
  fn factories() {
    let b = basis();
    // (kind, lower, upper, accepted)
    let cases = vec![
      (Kind::Open, 5, 5, true),
      (Kind::Closed, 5, 5, true),
      (Kind::LeftOpen, 5, 5, false),
      (Kind::RightOpen, 5, 5, false),
      (Kind::Open, 1, 3, true),
      (Kind::LeftOpen, 1, 3, true),
      (Kind::RightOpen, 1, 3, true),
      (Kind::Closed, 1, 3, true),
      (Kind::Open, 3, 1, false),
      (Kind::LeftOpen, 3, 1, false),
      (Kind::RightOpen, 3, 1, false),
      (Kind::Closed, 3, 1, false)
    ];
    for (kind, lower, upper, accepted) in cases {
      let res = b.try_interval(kind, lower, upper);
      assert_eq!(res.is_ok(), accepted, "{} interval from {} to {}", kind, lower, upper);
      match res {
        Ok(i) => {
          assert_eq!(i.kind(), kind);
          assert_eq!(i.into_bounds(), (lower, upper));
        }
        Err(e) => {
          assert_eq!(e.kind(), kind);
          assert_eq!(e.into_bounds(), (lower, upper));
        }
      }
    }
  }

  #[test]
  fn named_factories() {
    let b = basis();
    assert!(b.open(1, 3).is_open());
    assert!(b.left_open(1, 3).is_left_open());
    assert!(b.right_open(1, 3).is_right_open());
    assert!(b.closed(1, 3).is_closed());
    assert!(b.try_open(5, 5).is_ok());
    assert!(b.try_closed(5, 5).is_ok());
    assert_eq!(b.try_left_open(5, 5), Err(BoundsError::Misordered { kind: Kind::LeftOpen, lower: 5, upper: 5 }));
    assert_eq!(b.try_right_open(5, 5), Err(BoundsError::Misordered { kind: Kind::RightOpen, lower: 5, upper: 5 }));
  }

  #[test]
  #[should_panic(expected = "Cannot build the left-open interval (5, 5]")]
  fn left_open_equal_bounds_panic() {
    basis().left_open(5, 5);
  }

  #[test]
  #[should_panic(expected = "Cannot build the right-open interval [5, 5)")]
  fn right_open_equal_bounds_panic() {
    basis().right_open(5, 5);
  }

  #[test]
  #[should_panic(expected = "Cannot build the closed interval [4, 2]")]
  fn closed_misordered_panic() {
    basis().closed(4, 2);
  }

  #[test]
  #[should_panic(expected = "Cannot build the open interval (4, 2)")]
  fn open_misordered_panic() {
    basis().open(4, 2);
  }

  #[test]
  fn before_after() {
    let b = basis();
    // (i1, i2, before(i1, i2), after(i1, i2))
    let cases = vec![
      (b.closed(1, 3), b.closed(3, 5), false, false),
      (b.closed(1, 3), b.right_open(3, 5), false, false),
      (b.closed(1, 3), b.left_open(3, 5), true, false),
      (b.closed(1, 3), b.open(3, 5), true, false),
      (b.right_open(1, 3), b.closed(3, 5), true, false),
      (b.right_open(1, 3), b.right_open(3, 5), true, false),
      (b.left_open(1, 3), b.closed(4, 5), true, false),
      (b.closed(1, 5), b.closed(2, 3), false, false),
      (b.closed(3, 5), b.closed(1, 3), false, false),
      (b.left_open(3, 5), b.closed(1, 3), false, true),
      (b.closed(3, 5), b.right_open(1, 3), false, true),
      (b.closed(6, 9), b.open(1, 3), false, true)
    ];
    for (i1, i2, before, after) in cases {
      assert_eq!(b.before(&i1, &i2), before, "{} before {}", i1, i2);
      assert_eq!(b.after(&i1, &i2), after, "{} after {}", i1, i2);
      assert_eq!(b.after(&i2, &i1), before, "{} after {}", i2, i1);
      assert_eq!(b.is_disjoint(&i1, &i2), before || after);
      assert_eq!(b.overlaps(&i1, &i2), !(before || after));
    }
  }

  #[test]
  fn starts_before_ends_after() {
    let b = basis();
    // (i1, i2, starts_before(i1, i2), ends_after(i1, i2))
    let cases = vec![
      (b.closed(1, 3), b.closed(2, 4), true, false),
      (b.closed(2, 4), b.closed(1, 3), false, true),
      (b.closed(1, 3), b.left_open(1, 3), true, true),
      (b.left_open(1, 3), b.closed(1, 3), false, true),
      (b.open(1, 3), b.closed(1, 3), false, false),
      (b.open(1, 3), b.open(1, 3), true, true),
      (b.closed(1, 3), b.closed(1, 3), true, true),
      (b.right_open(1, 3), b.closed(1, 3), true, false),
      (b.right_open(1, 3), b.left_open(1, 3), true, false)
    ];
    for (i1, i2, starts_before, ends_after) in cases {
      assert_eq!(b.starts_before(&i1, &i2), starts_before, "{} starts before {}", i1, i2);
      assert_eq!(b.ends_after(&i1, &i2), ends_after, "{} ends after {}", i1, i2);
    }
  }

  #[test]
  fn contains_honors_inclusion() {
    let b = basis();
    let cases = vec![
      (b.open(1, 3), vec![2], vec![0, 1, 3, 4]),
      (b.left_open(1, 3), vec![2, 3], vec![1, 4]),
      (b.right_open(1, 3), vec![1, 2], vec![0, 3]),
      (b.closed(1, 3), vec![1, 2, 3], vec![0, 4]),
      (b.closed(5, 5), vec![5], vec![4, 6]),
      (b.open(5, 5), vec![], vec![4, 5, 6])
    ];
    for (i, inside, outside) in cases {
      for x in &inside {
        assert!(b.contains(&i, x), "{} is not contained inside {}, but it should.", x, i);
      }
      for x in &outside {
        assert!(!b.contains(&i, x), "{} is contained inside {}, but it should not.", x, i);
      }
    }
  }

  #[test]
  fn empty_whole_point() {
    let b = basis();
    assert!(b.is_empty(&b.empty()));
    assert!(b.is_empty(&b.open(4, 4)));
    assert!(!b.is_empty(&b.open(4, 5)));
    assert!(!b.is_empty(&b.closed(4, 4)));
    assert_eq!(b.whole(), b.closed(0, 10));
    assert_eq!(b.point(7), b.closed(7, 7));
  }

  #[test]
  fn check_untrusted_intervals() {
    let b = basis();
    assert_eq!(b.check(&b.closed(0, 10)), Ok(()));
    assert_eq!(b.check(&b.open(3, 3)), Ok(()));

    let outside = Basis::natural(-5, 20).closed(-1, 4);
    assert!(!b.admits(&outside));
    assert_eq!(b.check(&outside), Err(BoundsError::OutsideDomain { kind: Kind::Closed, lower: -1, upper: 4 }));

    let misordered = Interval::new_unchecked(Kind::RightOpen, 2, 2);
    assert_eq!(b.check(&misordered), Err(BoundsError::Misordered { kind: Kind::RightOpen, lower: 2, upper: 2 }));
  }

  #[test]
  fn error_display() {
    let e = BoundsError::OutsideDomain { kind: Kind::Open, lower: -1, upper: 4 };
    assert_eq!(e.to_string(), "The open interval (-1, 4) does not fit in the domain of the basis.");
    let e = BoundsError::Misordered { kind: Kind::Closed, lower: "b", upper: "a" };
    assert_eq!(e.to_string(), "Cannot build the closed interval [\"b\", \"a\"]: the lower bound must be less or equal than the upper bound.");
  }

  #[test]
  fn full_range() {
    let b: Basis<u8> = Basis::full();
    assert_eq!(*b.min(), 0);
    assert_eq!(*b.max(), 255);
    let b: Basis<i16> = Basis::full();
    assert_eq!(*b.min(), i16::MIN);
    assert_eq!(*b.max(), i16::MAX);
  }

  #[test]
  fn reversed_comparator() {
    let b = Basis::new(10, 0, |a: &i32, b: &i32| b.cmp(a));
    assert!(b.try_closed(1, 3).is_err());
    let i = b.closed(3, 1);
    assert!(b.contains(&i, &2));
    assert!(b.admits(&i));
    assert!(b.before(&b.closed(9, 7), &i));
    assert_eq!(b.compare(&1, &3), Ordering::Greater);
  }

  #[test]
  fn equivalent_bases() {
    let b = basis();
    let cases = vec![
      (1, b.clone(), true),
      (2, Basis::natural(0, 10), true),
      (3, Basis::natural(0, 20), false),
      (4, Basis::natural(-1, 10), false)
    ];
    for (id, other, expected) in cases {
      assert_eq!(b.is_equivalent(&other), expected, "test #{} of is_equivalent", id);
      assert_eq!(other.is_equivalent(&b), expected, "test #{} of is_equivalent (swapped)", id);
    }
  }
}
