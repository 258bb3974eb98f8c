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

/// Marks a visual range beyond what the instruments can measure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangePrefix {
    /// More than the reported value (`P`).
    MoreThan,
    /// Less than the reported value (`M`).
    LessThan,
}

impl RangePrefix {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(Self::MoreThan),
            "M" => Some(Self::LessThan),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeUnit {
    Meters,
    Feet,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trend {
    Upward,
    Downward,
    NoChange,
}

impl Trend {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Self::Upward),
            "D" => Some(Self::Downward),
            "N" => Some(Self::NoChange),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayReport {
    /// Contamination cleared the given minutes ago (`R27/CLRD70`).
    Cleared { minutes: u16 },
    /// Runway visual range, e.g. `R28L/2600FT`, `R06/1200V1800FT/U`.
    VisualRange {
        prefix: Option<RangePrefix>,
        visibility: u32,
        variable_max: Option<u32>,
        unit: RangeUnit,
        trend: Option<Trend>,
    },
}

/// A runway visual range or runway state group.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayCondition {
    /// The runway designator including a `L`, `C` or `R` suffix.
    pub runway: String,
    pub report: RunwayReport,
    raw: String,
}

impl RunwayCondition {
    /// Returns the group as reported.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for RunwayCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = RUNWAY_CLEARED.captures(s) {
            return Ok(Self {
                runway: caps[1].to_string(),
                report: RunwayReport::Cleared {
                    minutes: digits!(caps, 2, u16),
                },
                raw: s.to_string(),
            });
        }

        if let Some(caps) = RUNWAY_RANGE.captures(s) {
            let unit = if caps.get(6).is_some() {
                RangeUnit::Feet
            } else {
                RangeUnit::Meters
            };

            return Ok(Self {
                runway: caps[1].to_string(),
                report: RunwayReport::VisualRange {
                    prefix: caps.get(2).and_then(|m| RangePrefix::from_code(m.as_str())),
                    visibility: digits!(caps, 3),
                    variable_max: opt_digits!(caps, 5, u32),
                    unit,
                    trend: caps.get(7).and_then(|m| Trend::from_code(m.as_str())),
                },
                raw: s.to_string(),
            });
        }

        Err(Error::unexpected("runway", s))
    }
}

impl fmt::Display for RunwayCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
