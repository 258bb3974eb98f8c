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

/// The direction the wind is blowing from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindDirection {
    /// Variable direction (`VRB`).
    Variable,
    /// True bearing in degrees where `000` is reported for calm wind.
    Bearing(u16),
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => write!(f, "VRB"),
            Self::Bearing(bearing) => write!(f, "{bearing:03}"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    #[default]
    Knots,
    MetersPerSecond,
}

impl SpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "KT",
            Self::MetersPerSecond => "MPS",
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KT" => Ok(Self::Knots),
            "MPS" => Ok(Self::MetersPerSecond),
            _ => Err(Error::unexpected("speed unit", s)),
        }
    }
}

/// Variation of the wind direction between two bearings, e.g. `250V310`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindVariation {
    pub from: u16,
    pub to: u16,
}

impl FromStr for WindVariation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = WIND_VARIATION
            .captures(s)
            .ok_or_else(|| Error::unexpected("wind variation", s))?;

        Ok(Self {
            from: digits!(caps, 1, u16),
            to: digits!(caps, 2, u16),
        })
    }
}

impl fmt::Display for WindVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}V{:03}", self.from, self.to)
    }
}

/// Surface wind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub direction: WindDirection,
    /// The mean speed or `None` if the group reports no speed.
    pub speed: Option<u16>,
    pub gust: Option<u16>,
    pub unit: SpeedUnit,
    pub variation: Option<WindVariation>,
    /// The wind is estimated (`E` prefix).
    pub estimated: bool,
}

impl Wind {
    /// Returns `true` if the wind is reported as calm.
    pub fn is_calm(&self) -> bool {
        self.direction == WindDirection::Bearing(0) && self.speed.unwrap_or_default() == 0
    }

    /// Recognizes a wind group and a direction variation following it.
    ///
    /// Returns the wind and the number of tokens it spans.
    pub(crate) fn recognize(tokens: &[&str]) -> Option<(Self, usize)> {
        let mut wind = tokens.first()?.parse::<Self>().ok()?;

        match tokens.get(1).map(|next| next.parse::<WindVariation>()) {
            Some(Ok(variation)) => {
                wind.variation = Some(variation);
                Some((wind, 2))
            }
            _ => Some((wind, 1)),
        }
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group `dddff(Gfmfm)KT` where the speed can be given in
    /// knots (`KT`) or meters per second (`MPS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = WIND.captures(s) {
            let direction = match &caps[2] {
                "VRB" => WindDirection::Variable,
                bearing => WindDirection::Bearing(bearing.parse().unwrap_or_default()),
            };

            return Ok(Self {
                direction,
                speed: opt_digits!(caps, 3, u16),
                gust: opt_digits!(caps, 4, u16),
                unit: caps[5].parse()?,
                variation: None,
                estimated: caps.get(1).is_some(),
            });
        }

        if let Some(caps) = WIND_CALM.captures(s) {
            return Ok(Self {
                direction: WindDirection::Bearing(0),
                speed: None,
                gust: opt_digits!(caps, 1, u16),
                unit: caps[2].parse()?,
                variation: None,
                estimated: false,
            });
        }

        Err(Error::unexpected("wind", s))
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.estimated {
            write!(f, "E")?;
        }

        write!(f, "{}", self.direction)?;

        if let Some(speed) = self.speed {
            write!(f, "{speed:02}")?;
        }

        if let Some(gust) = self.gust {
            write!(f, "G{gust:02}")?;
        }

        write!(f, "{}", self.unit.symbol())?;

        if let Some(variation) = self.variation {
            write!(f, " {variation}")?;
        }

        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////
// Wind Shear
/////////////////////////////////////////////////////////////////////////////

/// Flight phase a runway wind shear is reported for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShearPhase {
    Takeoff,
    Landing,
    All,
}

impl FromStr for ShearPhase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TKOF" => Ok(Self::Takeoff),
            "LDG" => Ok(Self::Landing),
            "ALL" => Ok(Self::All),
            _ => Err(Error::unexpected("wind shear phase", s)),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindShear {
    /// Wind shear on a runway or all runways if `runway` is `None`.
    Runway {
        phase: ShearPhase,
        runway: Option<String>,
    },
    /// Wind shear at an altitude in hundreds of feet above ground.
    Altitude { altitude: u16, wind: Wind },
}

impl WindShear {
    /// Recognizes one of the wind shear groups:
    ///
    /// - `WS ALL RWY`, `WS TKOF RWY12`, `WS LDG RWY30L` spanning three tokens
    /// - `WS R12` or `WS RWY12` spanning two tokens
    /// - `WS020/05065KT` or `WSR12` as single token
    pub(crate) fn recognize(tokens: &[&str]) -> Option<(Self, usize)> {
        match tokens {
            ["WS", phase, rwy, ..] if WIND_SHEAR_PHASE.is_match(phase) => {
                let caps = WIND_SHEAR_RWY.captures(rwy)?;
                Some((
                    Self::Runway {
                        phase: phase.parse().ok()?,
                        runway: caps.get(1).map(|m| m.as_str().to_string()),
                    },
                    3,
                ))
            }

            ["WS", rwy, ..] => {
                let caps = WIND_SHEAR_R.captures(rwy)?;
                Some((
                    Self::Runway {
                        phase: ShearPhase::All,
                        runway: Some(caps[1].to_string()),
                    },
                    2,
                ))
            }

            [token, ..] => token.parse().ok().map(|ws| (ws, 1)),

            [] => None,
        }
    }
}

impl FromStr for WindShear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = WIND_SHEAR_ALTITUDE.captures(s) {
            let direction = WindDirection::Bearing(digits!(caps, 2, u16));

            return Ok(Self::Altitude {
                altitude: digits!(caps, 1, u16),
                wind: Wind {
                    direction,
                    speed: opt_digits!(caps, 3, u16),
                    gust: opt_digits!(caps, 4, u16),
                    unit: caps[5].parse()?,
                    variation: None,
                    estimated: false,
                },
            });
        }

        if let Some(caps) = WIND_SHEAR_RUNWAY.captures(s) {
            return Ok(Self::Runway {
                phase: ShearPhase::All,
                runway: Some(caps[1].to_string()),
            });
        }

        Err(Error::unexpected("wind shear", s))
    }
}
