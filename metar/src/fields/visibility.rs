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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::*;
use crate::Error;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibilityKind {
    /// Statute miles, e.g. `10SM`, `1 1/2SM`, `M1/4SM` or `P6SM`.
    StatuteMiles,
    /// Four digit meters, e.g. `9999`.
    Meters,
    /// Meters towards a compass direction, e.g. `4000NE`.
    MetersWithDirection,
    /// No directional variation, e.g. `9999NDV`.
    NoDirectionalVariation,
    /// Ceiling and visibility OK.
    Cavok,
}

/// Prevailing visibility.
///
/// The visibility is kept as reported since converting units is up to the
/// presentation of the report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    pub kind: VisibilityKind,
    raw: String,
}

impl Visibility {
    pub fn cavok() -> Self {
        Self {
            kind: VisibilityKind::Cavok,
            raw: String::from("CAVOK"),
        }
    }

    /// Returns the visibility as reported.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Recognizes a visibility where a whole number followed by a fraction
    /// spans two tokens, e.g. `1 1/2SM`.
    pub(crate) fn recognize(tokens: &[&str]) -> Option<(Self, usize)> {
        match tokens {
            [whole, fraction, ..]
                if VISIBILITY_WHOLE.is_match(whole) && VISIBILITY_FRACTION.is_match(fraction) =>
            {
                Some((
                    Self {
                        kind: VisibilityKind::StatuteMiles,
                        raw: format!("{whole} {fraction}"),
                    },
                    2,
                ))
            }

            [token, ..] => token.parse().ok().map(|vis| (vis, 1)),

            [] => None,
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = if VISIBILITY_SM.is_match(s) {
            VisibilityKind::StatuteMiles
        } else if VISIBILITY_METERS.is_match(s) {
            VisibilityKind::Meters
        } else if VISIBILITY_DIRECTION.is_match(s) {
            VisibilityKind::MetersWithDirection
        } else if VISIBILITY_NDV.is_match(s) {
            VisibilityKind::NoDirectionalVariation
        } else if s == "CAVOK" {
            VisibilityKind::Cavok
        } else {
            return Err(Error::unexpected("visibility", s));
        };

        Ok(Self {
            kind,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Vertical visibility into an obscured sky in hundreds of feet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerticalVisibility(pub u16);

impl VerticalVisibility {
    /// Returns the vertical visibility in feet.
    pub fn feet(&self) -> u32 {
        self.0 as u32 * 100
    }
}

impl FromStr for VerticalVisibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VERTICAL_VISIBILITY
            .captures(s)
            .map(|caps| Self(digits!(caps, 1, u16)))
            .ok_or_else(|| Error::unexpected("vertical visibility", s))
    }
}
