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

//! This library proposes an algebra of bounded intervals over any totally ordered domain. The order is not taken from the bound type but from a comparator held by a [basis](basis/index.html), which also knows the smallest and greatest values of the domain. Intervals have independently inclusive or exclusive ends: open `(l, r)`, left-open `(l, r]`, right-open `[l, r)` and closed `[l, r]`.
//!
//! The basis builds intervals, relates them (`before`, `after`, `starts_before`, `ends_after`) and combines them (`intersect`, `union`, `negate`). Three bases are predefined: [every `isize`](static.INT_BASIS.html), [every string](static.STRING_BASIS.html) and [a century of time](static.TIME_BASIS.html) from 1970 to 2070.
//!
//! # Examples
//!
//! ```rust
//! use rangebasis::{Basis, INT_BASIS};
//!
//! let offsets = Basis::natural(0u64, 1 << 20);
//! let kept = offsets.right_open(100, 200);
//! let seen = offsets.closed(150, 400);
//! assert_eq!(offsets.intersect(&kept, &seen), Some(offsets.right_open(150, 200)));
//! assert_eq!(offsets.union(&kept, &seen), Some(offsets.closed(100, 400)));
//! assert_eq!(offsets.negate(&kept), vec![offsets.right_open(0, 100), offsets.closed(200, 1 << 20)]);
//!
//! let nothing = INT_BASIS.open(7, 7);
//! assert_eq!(INT_BASIS.negate(&nothing), vec![INT_BASIS.whole()]);
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

pub mod anchored;
pub mod basis;
pub mod domains;
pub mod interval;
pub mod ops;
pub mod set_operations;

pub use crate::anchored::Anchored;
pub use crate::basis::{Basis, BoundsError};
pub use crate::domains::{INT_BASIS, STRING_BASIS, TIME_BASIS};
pub use crate::interval::{Interval, Kind};
pub use crate::ops::{Comparator, Natural};
