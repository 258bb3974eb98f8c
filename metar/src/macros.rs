// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Declares the compiled regular expressions of a grammar table.
///
/// Each pattern is compiled once on first use. The patterns are literals
/// written in this crate, thus a failing compilation is a programming error.
macro_rules! patterns {
    ($($(#[$meta:meta])* $name:ident = $re:expr;)+) => {
        lazy_static::lazy_static! {
            $(
                $(#[$meta])*
                pub(crate) static ref $name: regex::Regex =
                    regex::Regex::new($re).expect(concat!("bad pattern ", stringify!($name)));
            )+
        }
    };
}

/// Parses the digits of a capture group leniently.
///
/// A group that looks right but whose digits don't parse degrades to the
/// type's default value, so a single malformed field never aborts decoding.
macro_rules! digits {
    ($caps:expr, $i:expr) => {
        digits!($caps, $i, u32)
    };

    ($caps:expr, $i:expr, $t:ty) => {
        $caps
            .get($i)
            .and_then(|m| m.as_str().parse::<$t>().ok())
            .unwrap_or_default()
    };
}

/// Parses an optional capture group, `None` if the group didn't participate.
macro_rules! opt_digits {
    ($caps:expr, $i:expr, $t:ty) => {
        $caps.get($i).and_then(|m| m.as_str().parse::<$t>().ok())
    };
}
