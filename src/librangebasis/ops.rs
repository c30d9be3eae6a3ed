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

//! Ordering of bounds.
//!
//! A [basis](../basis/index.html) never relies on `Ord` directly: it asks its comparator. This lets the same algebra run over domains whose order is not the natural one of the bound type (reversed keys, case-insensitive strings, ...).

use std::cmp::Ordering;

/// Three-way comparison of two bounds. It must be a strict total order consistent with the bounds of the basis using it.
pub trait Comparator<T: ?Sized>
{
  fn compare(&self, a: &T, b: &T) -> Ordering;

  fn less(&self, a: &T, b: &T) -> bool {
    self.compare(a, b) == Ordering::Less
  }

  fn less_eq(&self, a: &T, b: &T) -> bool {
    self.compare(a, b) != Ordering::Greater
  }

  fn equal(&self, a: &T, b: &T) -> bool {
    self.compare(a, b) == Ordering::Equal
  }
}

/// The comparator of types already totally ordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    a.cmp(b)
  }
}

impl<T: ?Sized, F> Comparator<T> for F where
  F: Fn(&T, &T) -> Ordering
{
  fn compare(&self, a: &T, b: &T) -> Ordering {
    self(a, b)
  }
}
