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

//! Bounded interval with independently inclusive or exclusive ends.
//!
//! An interval does not know how its bounds are ordered, it is only a value: the lower bound, the upper bound and the [kind](enum.Kind.html) of its ends. Building intervals and relating them to each other is the job of the [basis](../basis/index.html) of their domain, which owns the comparator.
//!
//! ```rust
//! use rangebasis::{Basis, Kind};
//!
//! let basis = Basis::natural(0, 100);
//! let i = basis.left_open(1, 3);
//! assert_eq!(i.kind(), Kind::LeftOpen);
//! assert!(!i.lower_included() && i.upper_included());
//! assert_eq!(format!("{}", i), "(1, 3]");
//! ```

use serde::{Serialize, Deserialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The four boundary-inclusion variants of an interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Kind
{
  /// `(l, r)`, neither bound included. `(x, x)` is the empty interval.
  Open,
  /// `(l, r]`
  LeftOpen,
  /// `[l, r)`
  RightOpen,
  /// `[l, r]`, `[x, x]` is a single point.
  Closed
}

impl Kind
{
  pub fn from_inclusion(lower_included: bool, upper_included: bool) -> Kind {
    match (lower_included, upper_included) {
      (false, false) => Kind::Open,
      (false, true) => Kind::LeftOpen,
      (true, false) => Kind::RightOpen,
      (true, true) => Kind::Closed
    }
  }

  pub fn lower_included(self) -> bool {
    match self {
      Kind::RightOpen | Kind::Closed => true,
      Kind::Open | Kind::LeftOpen => false
    }
  }

  pub fn upper_included(self) -> bool {
    match self {
      Kind::LeftOpen | Kind::Closed => true,
      Kind::Open | Kind::RightOpen => false
    }
  }

  /// Half-open kinds cannot have equal bounds.
  pub fn is_half_open(self) -> bool {
    self.lower_included() != self.upper_included()
  }

  pub(crate) fn left_bracket(self) -> char {
    if self.lower_included() { '[' } else { '(' }
  }

  pub(crate) fn right_bracket(self) -> char {
    if self.upper_included() { ']' } else { ')' }
  }
}

impl Display for Kind
{
  fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
    let name = match *self {
      Kind::Open => "open",
      Kind::LeftOpen => "left-open",
      Kind::RightOpen => "right-open",
      Kind::Closed => "closed"
    };
    formatter.write_str(name)
  }
}

/// An immutable interval. Only intervals coming out of a [`Basis`](../basis/struct.Basis.html) factory are guaranteed to have ordered bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Interval<T>
{
  lower: T,
  upper: T,
  kind: Kind
}

impl<T> Interval<T>
{
  /// The caller is responsible for the ordering of the bounds.
  pub(crate) fn new_unchecked(kind: Kind, lower: T, upper: T) -> Interval<T> {
    Interval { lower, upper, kind }
  }

  pub fn lower(&self) -> &T {
    &self.lower
  }

  pub fn upper(&self) -> &T {
    &self.upper
  }

  pub fn kind(&self) -> Kind {
    self.kind
  }

  pub fn lower_included(&self) -> bool {
    self.kind.lower_included()
  }

  pub fn upper_included(&self) -> bool {
    self.kind.upper_included()
  }

  pub fn is_open(&self) -> bool {
    self.kind == Kind::Open
  }

  pub fn is_left_open(&self) -> bool {
    self.kind == Kind::LeftOpen
  }

  pub fn is_right_open(&self) -> bool {
    self.kind == Kind::RightOpen
  }

  pub fn is_closed(&self) -> bool {
    self.kind == Kind::Closed
  }

  pub fn into_bounds(self) -> (T, T) {
    (self.lower, self.upper)
  }
}

impl<T: Display> Display for Interval<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> FmtResult {
    write!(formatter, "{}{}, {}{}",
      self.kind.left_bracket(), self.lower,
      self.upper, self.kind.right_bracket())
  }
}
