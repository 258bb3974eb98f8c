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

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classifier::{Classified, Context, Group, Groups};
use crate::fields::*;
use crate::grammar::BODY_TERMINATORS;
use crate::remarks::{self, Remark};
use crate::time::DayTime;
use crate::Decoder;

/// Routine (`METAR`) or special (`SPECI`) observation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportType {
    #[default]
    Metar,
    Speci,
}

/// A decoded aerodrome weather observation.
///
/// Decoding never fails. Groups that can't be decoded are kept in
/// [`unhandled`] and a report that is too short to carry a station and time
/// has only the [`raw`] text set.
///
/// [`unhandled`]: Metar::unhandled
/// [`raw`]: Metar::raw
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metar {
    pub raw: String,
    pub kind: ReportType,
    pub station: Station,
    pub observed_at: Option<DateTime<Utc>>,
    pub wind: Option<Wind>,
    pub wind_shear: Vec<WindShear>,
    pub visibility: Option<Visibility>,
    pub vertical_visibility: Option<VerticalVisibility>,
    pub runway_conditions: Vec<RunwayCondition>,
    /// Present weather groups as reported, e.g. `-RA` or `VCTS`.
    pub weather: Vec<String>,
    pub clouds: Vec<Cloud>,
    /// Temperature in degrees Celsius.
    pub temperature: Option<i8>,
    /// Dew point in degrees Celsius.
    pub dew_point: Option<i8>,
    /// The first altimeter setting of the report.
    pub pressure: Option<Pressure>,
    pub special: Vec<SpecialCode>,
    /// Trend forecast that follows a `TEMPO` or `BECMG` keyword.
    pub trend: Option<String>,
    pub remarks: Vec<Remark>,
    /// Tokens of the main body that match no group.
    pub unhandled: Vec<String>,
}

impl Metar {
    /// Returns `true` if the report was corrected.
    pub fn is_corrected(&self) -> bool {
        self.special.iter().any(SpecialCode::is_correction)
    }

    fn apply(&mut self, group: Group) {
        match group {
            Group::Special(code) => {
                if code == SpecialCode::Cavok {
                    self.visibility = Some(Visibility::cavok());
                }
                self.special.push(code);
            }
            Group::Wind(wind) => self.wind = Some(wind),
            Group::WindVariation(variation) => {
                if let Some(wind) = self.wind.as_mut() {
                    wind.variation = Some(variation);
                }
            }
            Group::WindShear(ws) => self.wind_shear.push(ws),
            Group::Visibility(vis) => self.visibility = Some(vis),
            Group::VerticalVisibility(vv) => self.vertical_visibility = Some(vv),
            Group::Runway(rwy) => self.runway_conditions.push(rwy),
            Group::Weather(wx) => self.weather.push(wx),
            Group::Cloud(cloud) => self.clouds.push(cloud),
            Group::Temperature {
                temperature,
                dew_point,
            } => {
                self.temperature = Some(temperature);
                self.dew_point = dew_point;
            }
            Group::Pressure(pressure) => match self.pressure {
                None => self.pressure = Some(pressure),
                Some(_) => trace!("ignoring additional pressure {pressure}"),
            },
        }
    }
}

impl FromStr for Metar {
    type Err = Infallible;

    /// Decodes a METAR relative to the current time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Decoder::new().metar(s))
    }
}

/// Decodes a METAR where the observation time is resolved relative to `now`.
pub(crate) fn decode(raw: &str, now: DateTime<Utc>) -> Metar {
    let mut metar = Metar {
        raw: raw.to_string(),
        ..Default::default()
    };

    let mut tokens: &[&str] = &raw.split_whitespace().collect::<Vec<_>>();

    match tokens.first() {
        Some(&"METAR") => tokens = &tokens[1..],
        Some(&"SPECI") => {
            metar.kind = ReportType::Speci;
            tokens = &tokens[1..];
        }
        _ => (),
    }

    if tokens.len() < 2 {
        debug!("METAR too short to decode: {raw:?}");
        return metar;
    }

    metar.station = Station::new(tokens[0]);
    tokens = &tokens[1..];

    // a correction can be put in front of the time group
    if let Some(code) = tokens
        .first()
        .and_then(|token| token.parse::<SpecialCode>().ok())
        .filter(SpecialCode::is_correction)
    {
        metar.special.push(code);
        tokens = &tokens[1..];
    }

    if let Some(&time) = tokens.first() {
        match DayTime::issue(time) {
            Some(observed) => metar.observed_at = observed.past(now),
            None => {
                debug!("unexpected observation time {time:?}");
                metar.unhandled.push(time.to_string());
            }
        }
        tokens = &tokens[1..];
    }

    let body_end = tokens
        .iter()
        .position(|token| BODY_TERMINATORS.contains(token))
        .unwrap_or(tokens.len());

    for item in Groups::new(&tokens[..body_end], Context::Observation) {
        match item {
            Classified::Group(group) => metar.apply(group),
            Classified::Unhandled(token) => {
                debug!("unhandled METAR group {token:?}");
                metar.unhandled.push(token.to_string());
            }
        }
    }

    let rmk = tokens.iter().position(|token| *token == "RMK");

    if body_end < rmk.unwrap_or(tokens.len()) {
        metar.trend = Some(tokens[body_end..rmk.unwrap_or(tokens.len())].join(" "));
    }

    if let Some(rmk) = rmk {
        metar.remarks = remarks::decode(&tokens[rmk + 1..]);
    }

    debug!(
        "decoded METAR of {} with {} clouds, {} remarks and {} unhandled groups",
        metar.station.ident,
        metar.clouds.len(),
        metar.remarks.len(),
        metar.unhandled.len()
    );

    metar
}
