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

//! Terminal aerodrome forecasts.
//!
//! A TAF is decoded into a timeline of forecast periods. The first period is
//! the base forecast that starts with the validity of the TAF. Each change
//! group opens a new period:
//!
//! - `FM` periods start at their time and last until the next period starts
//! - `BECMG` and `TEMPO` periods have their own interval `DDHH/DDHH`
//! - `PROB30`, `PROB40` and other `PROBnn` periods have their own interval or
//!   share the interval of the period they follow
//!
//! A period without an end is closed when the next period with its own start
//! opens, and the periods still open at the end of the forecast are closed
//! with the end of the validity.
//!
//! A `BECMG` or `TEMPO` interval closes the open `FM` period as well, but its
//! own end is kept as reported. A TAF that ends with such an interval thus has
//! a gap between the end of the interval and the end of the validity in which
//! [`Taf::forecasts_at`] returns no period.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classifier::{Classified, Context, Group, Groups};
use crate::fields::*;
use crate::grammar::*;
use crate::time::DayTime;
use crate::Decoder;

/// Amendment or correction of a TAF.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TafModifier {
    Amended,
    Corrected,
}

impl FromStr for TafModifier {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMD" => Ok(Self::Amended),
            "COR" => Ok(Self::Corrected),
            _ => Err(crate::Error::unexpected("TAF modifier", s)),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ForecastKind {
    Base,
    From,
    Becoming,
    Temporary,
    Prob30,
    Prob40,
    /// Probability other than 30 or 40 percent, e.g. `PROB20`.
    Probability,
}

impl ForecastKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::From => "FM",
            Self::Becoming => "BECMG",
            Self::Temporary => "TEMPO",
            Self::Prob30 => "PROB30",
            Self::Prob40 => "PROB40",
            Self::Probability => "PROB",
        }
    }

    pub fn description(&self) -> &'static str {
        lookup(FORECAST_TYPES, self.code()).unwrap_or_default()
    }
}

impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A period of a TAF.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forecast {
    pub kind: ForecastKind,
    /// Probability in percent of `PROBnn` periods.
    pub probability: Option<u8>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub wind: Option<Wind>,
    pub wind_shear: Vec<WindShear>,
    pub visibility: Option<Visibility>,
    pub vertical_visibility: Option<VerticalVisibility>,
    pub weather: Vec<String>,
    pub clouds: Vec<Cloud>,
    pub special: Vec<SpecialCode>,
    /// The change group and the groups of the period as reported.
    pub raw: String,
}

impl Forecast {
    fn new(kind: ForecastKind) -> Self {
        Self {
            kind,
            probability: None,
            from: None,
            to: None,
            wind: None,
            wind_shear: Vec::new(),
            visibility: None,
            vertical_visibility: None,
            weather: Vec::new(),
            clouds: Vec::new(),
            special: Vec::new(),
            raw: String::new(),
        }
    }

    /// Returns `true` if the time is within the period.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= time && time < to,
            _ => false,
        }
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
            Group::Weather(wx) => self.weather.push(wx),
            Group::Cloud(cloud) => self.clouds.push(cloud),
            // a forecast period has no place for these
            Group::Runway(_) | Group::Temperature { .. } | Group::Pressure(_) => {
                trace!("discarding {:?} group in forecast", group.kind())
            }
        }
    }
}

/// A decoded terminal aerodrome forecast.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taf {
    pub raw: String,
    pub modifier: Option<TafModifier>,
    pub station: Station,
    pub issued_at: Option<DateTime<Utc>>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub forecasts: Vec<Forecast>,
}

impl Taf {
    /// Returns the periods that cover the time.
    pub fn forecasts_at(&self, time: DateTime<Utc>) -> impl Iterator<Item = &Forecast> {
        self.forecasts.iter().filter(move |f| f.contains(time))
    }

    // Opens a period and closes the periods that are still open if the new
    // period brings its own start.
    fn open(&mut self, forecast: Forecast, inherited: bool) {
        if let (Some(from), false) = (forecast.from, inherited) {
            for open in self.forecasts.iter_mut().filter(|f| f.to.is_none()) {
                open.to = Some(from);
            }
        }

        self.forecasts.push(forecast);
    }
}

impl FromStr for Taf {
    type Err = Infallible;

    /// Decodes a TAF relative to the current time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Decoder::new().taf(s))
    }
}

fn is_change_group(token: &str) -> bool {
    matches!(token, "FM" | "BECMG" | "TEMPO") || FROM.is_match(token) || PROBABILITY.is_match(token)
}

/// Decodes a TAF where the issue time is resolved relative to `now`.
pub(crate) fn decode(raw: &str, now: DateTime<Utc>) -> Taf {
    let mut taf = Taf {
        raw: raw.to_string(),
        ..Default::default()
    };

    // splitting on whitespace collapses line breaks
    let all: Vec<&str> = raw.split_whitespace().collect();

    if all.len() < 3 {
        debug!("TAF too short to decode: {raw:?}");
        return taf;
    }

    let mut tokens = &all[..];

    if tokens[0] == "TAF" {
        tokens = &tokens[1..];
    }

    if let Some(modifier) = tokens.first().and_then(|t| t.parse::<TafModifier>().ok()) {
        taf.modifier = Some(modifier);
        tokens = &tokens[1..];
    }

    let Some((station, mut tokens)) = tokens.split_first() else {
        return taf;
    };
    taf.station = Station::new(station);

    // header with issue time and validity
    let mut validity = None;
    while let Some(token) = tokens.first() {
        if let Some(issued) = DayTime::issue(token) {
            taf.issued_at = issued.past(now);
        } else if let Some(valid) = DayTime::validity(token) {
            validity = Some(valid);
            tokens = &tokens[1..];
            break;
        } else {
            break;
        }
        tokens = &tokens[1..];
    }

    // forecast times lie ahead of the issue time
    let anchor = taf.issued_at.unwrap_or(now);

    if let Some((from, to)) = validity {
        taf.valid_from = from.future(anchor);
        taf.valid_to = to.future(anchor);
    }

    let next_change = |start: usize| {
        tokens[start..]
            .iter()
            .position(|token| is_change_group(token))
            .map_or(tokens.len(), |n| start + n)
    };

    let mut end = next_change(0);
    let mut base = Forecast::new(ForecastKind::Base);
    base.from = taf.valid_from;
    base.raw = tokens[..end].join(" ");
    decode_period(&mut base, &tokens[..end]);
    taf.forecasts.push(base);

    while end < tokens.len() {
        let start = end;
        let mut i = start + 1;
        let mut inherited = false;

        let mut forecast = match tokens[start] {
            "FM" => {
                let mut forecast = Forecast::new(ForecastKind::From);
                if let Some(time) = tokens.get(i).and_then(|t| DayTime::from_time(t)) {
                    forecast.from = time.future(anchor);
                    i += 1;
                }
                forecast
            }

            kind @ ("BECMG" | "TEMPO") => {
                let mut forecast = Forecast::new(if kind == "BECMG" {
                    ForecastKind::Becoming
                } else {
                    ForecastKind::Temporary
                });
                if let Some((from, to)) = tokens.get(i).and_then(|t| DayTime::validity(t)) {
                    forecast.from = from.future(anchor);
                    forecast.to = to.future(anchor);
                    i += 1;
                }
                forecast
            }

            token if FROM.is_match(token) => {
                let mut forecast = Forecast::new(ForecastKind::From);
                // a malformed time leaves the period without a start
                forecast.from = DayTime::from_group(token).and_then(|time| time.future(anchor));
                forecast
            }

            token => {
                let probability = PROBABILITY
                    .captures(token)
                    .map(|caps| digits!(caps, 1, u8))
                    .unwrap_or_default();

                let kind = match probability {
                    30 => ForecastKind::Prob30,
                    40 => ForecastKind::Prob40,
                    _ => ForecastKind::Probability,
                };

                let mut forecast = Forecast::new(kind);
                forecast.probability = Some(probability);

                if let Some((from, to)) = tokens.get(i).and_then(|t| DayTime::validity(t)) {
                    forecast.from = from.future(anchor);
                    forecast.to = to.future(anchor);
                    i += 1;
                } else {
                    // share the interval of the preceding period
                    let (from, to) = taf
                        .forecasts
                        .last()
                        .map_or((taf.valid_from, taf.valid_to), |last| (last.from, last.to));
                    forecast.from = from;
                    forecast.to = to;
                    inherited = true;
                }
                forecast
            }
        };

        end = next_change(i);
        forecast.raw = tokens[start..end].join(" ");
        decode_period(&mut forecast, &tokens[i..end]);

        trace!(
            "{} period from {:?} to {:?}",
            forecast.kind,
            forecast.from,
            forecast.to
        );
        taf.open(forecast, inherited);
    }

    for open in taf.forecasts.iter_mut().filter(|f| f.to.is_none()) {
        open.to = taf.valid_to;
    }

    debug!(
        "decoded TAF of {} with {} periods",
        taf.station.ident,
        taf.forecasts.len()
    );

    taf
}

fn decode_period(forecast: &mut Forecast, tokens: &[&str]) {
    for item in Groups::new(tokens, Context::Forecast) {
        match item {
            Classified::Group(group) => forecast.apply(group),
            Classified::Unhandled(token) => trace!("skipping forecast group {token:?}"),
        }
    }
}
