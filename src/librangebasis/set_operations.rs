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

//! Intersection, union and complement of intervals.
//!
//! Intersection and union of two intervals are intervals only when the operands overlap, otherwise `None` is returned. The complement is taken relatively to the domain `[min, max]` of the basis and has at most two pieces.
//!
//! ```rust
//! use rangebasis::Basis;
//!
//! let basis = Basis::natural(0, 10);
//! assert_eq!(basis.intersect(&basis.closed(1, 3), &basis.closed(3, 5)), Some(basis.closed(3, 3)));
//! assert_eq!(basis.union(&basis.closed(1, 2), &basis.closed(5, 6)), None);
//! assert_eq!(basis.negate(&basis.left_open(2, 4)), vec![basis.closed(0, 2), basis.left_open(4, 10)]);
//! ```

use crate::basis::Basis;
use crate::interval::{Interval, Kind};
use crate::ops::Comparator;
use log::trace;

/// Interval starting at `left` and ending at `right`, both ends keeping their inclusion.
fn join<T: Clone>(left: &Interval<T>, right: &Interval<T>) -> Interval<T> {
  Interval::new_unchecked(
    Kind::from_inclusion(left.lower_included(), right.upper_included()),
    left.lower().clone(),
    right.upper().clone())
}

impl<T, C> Basis<T, C> where
  T: Clone,
  C: Comparator<T>
{
  pub fn intersect(&self, i1: &Interval<T>, i2: &Interval<T>) -> Option<Interval<T>> {
    if self.is_disjoint(i1, i2) {
      return None;
    }
    let left = if self.starts_before(i1, i2) { i2 } else { i1 };
    let right = if self.ends_after(i1, i2) { i2 } else { i1 };
    Some(join(left, right))
  }

  /// The union is refused on disjoint intervals, even when they touch, such as `[1, 3)` and `[3, 5)`.
  pub fn union(&self, i1: &Interval<T>, i2: &Interval<T>) -> Option<Interval<T>> {
    if self.is_disjoint(i1, i2) {
      return None;
    }
    let left = if self.starts_before(i1, i2) { i1 } else { i2 };
    let right = if self.ends_after(i1, i2) { i1 } else { i2 };
    Some(join(left, right))
  }

  /// Complement of `i` in `[min, max]`, ordered from the lowest piece.
  ///
  /// The complement of the whole domain is the empty interval `(min, min)`, never an empty vector.
  pub fn negate(&self, i: &Interval<T>) -> Vec<Interval<T>> {
    debug_assert!(self.admits(i), "Cannot negate an interval that does not fit in the domain of the basis.");
    let at_min = self.equal(i.lower(), self.min());
    let at_max = self.equal(i.upper(), self.max());
    let below = |kind: Kind| Interval::new_unchecked(kind, self.min().clone(), i.lower().clone());
    let above = |kind: Kind| Interval::new_unchecked(kind, i.upper().clone(), self.max().clone());

    let pieces = match i.kind() {
      Kind::Open if self.equal(i.lower(), i.upper()) => vec![self.whole()],
      Kind::Open => vec![below(Kind::Closed), above(Kind::Closed)],
      Kind::LeftOpen if at_max => vec![below(Kind::Closed)],
      Kind::LeftOpen => vec![below(Kind::Closed), above(Kind::LeftOpen)],
      Kind::RightOpen if at_min => vec![above(Kind::Closed)],
      Kind::RightOpen => vec![below(Kind::RightOpen), above(Kind::Closed)],
      Kind::Closed if at_min && at_max => vec![Interval::new_unchecked(Kind::Open, i.lower().clone(), i.lower().clone())],
      Kind::Closed if at_min => vec![above(Kind::LeftOpen)],
      Kind::Closed if at_max => vec![below(Kind::RightOpen)],
      Kind::Closed => vec![below(Kind::RightOpen), above(Kind::LeftOpen)]
    };
    if pieces.len() == 1 {
      trace!("negation of a {} interval collapsed to a single {} interval", i.kind(), pieces[0].kind());
    }
    pieces
  }
}
