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

//! Interval paired with the basis that built it.
//!
//! An anchored interval knows its comparator and domain, so it can implement the generic collection traits of `gcollections` (`Contains`, `Intersection`, `Union`, `Overlap`, `Disjoint`). Binary operations need a comparator implementing `PartialEq`, such as `Natural`, and panic when the two bases are not the same or equivalent (see `Basis::is_equivalent`).
//!
//! ```rust
//! use rangebasis::Basis;
//! use gcollections::ops::*;
//!
//! let basis = Basis::natural(0, 10);
//! let a = basis.anchor(basis.closed(1, 3));
//! let b = basis.anchor(basis.left_open(2, 6));
//! assert!(a.overlap(&b));
//! assert!(a.contains(&1) && !b.contains(&2));
//! assert_eq!(a.intersection(&b).map(|i| i.into_interval()), Some(basis.left_open(2, 3)));
//! ```

use crate::basis::Basis;
use crate::interval::Interval;
use crate::ops::Comparator;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Disjoint, Intersection, Overlap, Union};
use std::ptr;

#[derive(Debug)]
pub struct Anchored<'a, T, C>
{
  basis: &'a Basis<T, C>,
  interval: Interval<T>
}

impl<T, C> Basis<T, C> where
  C: Comparator<T>
{
  pub fn anchor(&self, interval: Interval<T>) -> Anchored<'_, T, C> {
    Anchored { basis: self, interval }
  }
}

impl<'a, T: Clone, C> Clone for Anchored<'a, T, C>
{
  fn clone(&self) -> Self {
    Anchored { basis: self.basis, interval: self.interval.clone() }
  }
}

impl<'a, T, C> Anchored<'a, T, C>
{
  pub fn basis(&self) -> &'a Basis<T, C> {
    self.basis
  }

  pub fn interval(&self) -> &Interval<T> {
    &self.interval
  }

  pub fn into_interval(self) -> Interval<T> {
    self.interval
  }
}

impl<'a, T, C> Anchored<'a, T, C> where
  C: Comparator<T> + PartialEq
{
  fn assert_same_basis(&self, other: &Anchored<'_, T, C>) {
    assert!(ptr::eq(self.basis, other.basis) || self.basis.is_equivalent(other.basis),
      "Cannot relate intervals anchored in different bases.");
  }
}

impl<'a, T, C> Collection for Anchored<'a, T, C>
{
  type Item = T;
}

impl<'a, T, C> Contains for Anchored<'a, T, C> where
  C: Comparator<T>
{
  fn contains(&self, value: &T) -> bool {
    self.basis.contains(&self.interval, value)
  }
}

impl<'a, 'b, T, C> Intersection<Anchored<'b, T, C>> for Anchored<'a, T, C> where
  T: Clone,
  C: Comparator<T> + PartialEq
{
  type Output = Option<Anchored<'a, T, C>>;

  fn intersection(&self, rhs: &Anchored<'b, T, C>) -> Self::Output {
    self.assert_same_basis(rhs);
    self.basis.intersect(&self.interval, &rhs.interval)
      .map(|i| self.basis.anchor(i))
  }
}

impl<'a, 'b, T, C> Union<Anchored<'b, T, C>> for Anchored<'a, T, C> where
  T: Clone,
  C: Comparator<T> + PartialEq
{
  type Output = Option<Anchored<'a, T, C>>;

  fn union(&self, rhs: &Anchored<'b, T, C>) -> Self::Output {
    self.assert_same_basis(rhs);
    self.basis.union(&self.interval, &rhs.interval)
      .map(|i| self.basis.anchor(i))
  }
}

impl<'a, 'b, T, C> Disjoint<Anchored<'b, T, C>> for Anchored<'a, T, C> where
  C: Comparator<T> + PartialEq
{
  fn is_disjoint(&self, rhs: &Anchored<'b, T, C>) -> bool {
    self.assert_same_basis(rhs);
    self.basis.is_disjoint(&self.interval, &rhs.interval)
  }
}

impl<'a, 'b, T, C> Overlap<Anchored<'b, T, C>> for Anchored<'a, T, C> where
  C: Comparator<T> + PartialEq
{
  fn overlap(&self, rhs: &Anchored<'b, T, C>) -> bool {
    !self.is_disjoint(rhs)
  }
}
