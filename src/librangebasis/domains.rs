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

//! Ready-to-use bases.
//!
//! ```rust
//! use rangebasis::INT_BASIS;
//!
//! let all = INT_BASIS.closed(isize::MIN, isize::MAX);
//! let rest = INT_BASIS.negate(&all);
//! assert!(rest.len() == 1 && INT_BASIS.is_empty(&rest[0]));
//! ```

use crate::basis::Basis;
use once_cell::sync::Lazy;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds from 1970-01-01 to 2070-01-01, 25 leap years included.
const CENTURY_SECS: u64 = 36_525 * 86_400;

/// Every `isize`, the signed integer of the target platform.
pub static INT_BASIS: Lazy<Basis<isize>> = Lazy::new(Basis::full);

/// Every string up to the greatest code point, ordered by code point.
pub static STRING_BASIS: Lazy<Basis<String>> =
  Lazy::new(|| Basis::natural(String::new(), char::MAX.to_string()));

/// From 1970-01-01T00:00:00Z to 2070-01-01T00:00:00Z.
pub static TIME_BASIS: Lazy<Basis<SystemTime>> =
  Lazy::new(|| Basis::natural(UNIX_EPOCH, UNIX_EPOCH + Duration::from_secs(CENTURY_SECS)));
