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

//! Remarks of a METAR.
//!
//! The remarks section follows the `RMK` keyword and is mostly used in North
//! America. Each remark is decoded by the first matching recognizer of a
//! fixed cascade, and tokens no recognizer understands are kept as
//! [`RemarkKind::Unknown`]. Thus every token of the section ends up in exactly
//! one remark.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::*;

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// The decoded value of a remark.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemarkKind {
    /// Peak wind with the time it occurred. The hour is omitted if the peak
    /// occurred within the hour of the observation.
    PeakWind {
        direction: u16,
        speed: u16,
        hour: Option<u8>,
        minute: u8,
    },
    /// Sea level pressure in hectopascal, `None` if not available.
    SeaLevelPressure(Option<f64>),
    /// Temperature and dew point in tenths of degrees Celsius.
    Temperature { temperature: f64, dew_point: f64 },
    /// Begin or end of a phenomenon at the given minute past the hour.
    PrecipitationEvent {
        phenomenon: String,
        began: bool,
        minute: u8,
    },
    SixHourMaximum(f64),
    SixHourMinimum(f64),
    /// 24-hour maximum and minimum temperature in degrees Celsius.
    DailyTemperature { max: f64, min: f64 },
    /// 3-hour pressure change in hectopascal.
    PressureChange(f64),
    /// Characteristic code of the 3-hour pressure tendency and the change in
    /// hectopascal.
    PressureTendency { code: u8, change: f64 },
    /// Precipitation within the last hour in inches.
    HourlyPrecipitation(f64),
    /// Precipitation within the last 24 hours in inches.
    DailyPrecipitation(f64),
    /// Snow depth in inches.
    SnowDepth(u16),
    /// Ice accretion in inches over the last hours.
    IceAccretion { hours: u8, amount: f64 },
    RecentWeather(String),
    RunwayVisualRange,
    /// Snow increase in inches within hours.
    SnowIncrease { inches: u16, hours: u16 },
    /// Variable ceiling height in feet.
    Ceiling(u32),
    /// A remark code of the code table.
    Code,
    Unknown,
}

/// A decoded remark.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Remark {
    /// The tokens of the remark joined by a single space.
    pub raw: String,
    pub description: String,
    pub kind: RemarkKind,
}

impl Remark {
    fn new(raw: impl Into<String>, description: impl Into<String>, kind: RemarkKind) -> Self {
        Self {
            raw: raw.into(),
            description: description.into(),
            kind,
        }
    }
}

type Recognizer = fn(&[&str]) -> Option<(Remark, usize)>;

static CASCADE: &[Recognizer] = &[
    peak_wind,
    precipitation_event,
    sea_level_pressure,
    temperature_tenths,
    six_hour_max,
    six_hour_min,
    daily_temperature,
    pressure_change,
    pressure_tendency,
    hourly_precipitation,
    daily_precipitation,
    snow_depth,
    ice_accretion,
    recent_weather,
    runway_visual_range,
    snow_increase,
    ceiling,
    remark_code,
];

/// Decodes the tokens that follow the `RMK` keyword.
pub fn decode(tokens: &[&str]) -> Vec<Remark> {
    let mut remarks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let remaining = &tokens[i..];

        let (remark, n) = CASCADE
            .iter()
            .find_map(|recognize| recognize(remaining))
            .unwrap_or_else(|| {
                (
                    Remark::new(remaining[0], "unknown remark code", RemarkKind::Unknown),
                    1,
                )
            });

        trace!("remark {:?}: {}", remark.raw, remark.description);
        remarks.push(remark);
        i += n.max(1);
    }

    remarks
}

/////////////////////////////////////////////////////////////////////////////
// Recognizers
/////////////////////////////////////////////////////////////////////////////

fn tenths(sign: &str, value: &str) -> f64 {
    let value = value.parse::<f64>().unwrap_or_default() / 10.0;
    if sign == "1" {
        -value
    } else {
        value
    }
}

fn peak_wind(tokens: &[&str]) -> Option<(Remark, usize)> {
    let ["PK", "WND", _, ..] = tokens else {
        return None;
    };

    let raw = tokens[..3].join(" ");
    let caps = PEAK_WIND.captures(&raw)?;

    let hour = opt_digits!(caps, 3, u8);
    let minute = digits!(caps, 4, u8);

    let description = match hour {
        Some(hour) => format!(
            "peak wind {}° at {} knots at {:02}:{:02}",
            &caps[1], &caps[2], hour, minute
        ),
        None => format!(
            "peak wind {}° at {} knots at {} minutes past the hour",
            &caps[1], &caps[2], minute
        ),
    };

    let kind = RemarkKind::PeakWind {
        direction: digits!(caps, 1, u16),
        speed: digits!(caps, 2, u16),
        hour,
        minute,
    };

    Some((Remark::new(raw, description, kind), 3))
}

fn precipitation_event(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = PRECIPITATION_EVENT.captures(token)?;

    let phenomenon = lookup(PRECIPITATION_EVENTS, &caps[1]).unwrap_or(&caps[1]);
    let began = &caps[2] == "B";
    let minute = digits!(caps, 3, u8);

    let description = format!(
        "{} {} at {} minutes past the hour",
        phenomenon,
        if began { "began" } else { "ended" },
        minute
    );

    let kind = RemarkKind::PrecipitationEvent {
        phenomenon: caps[1].to_string(),
        began,
        minute,
    };

    Some((Remark::new(*token, description, kind), 1))
}

fn sea_level_pressure(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = *tokens.first()?;

    // a bare SLP is left to the remark codes
    if !token.starts_with("SLP") || token == "SLP" {
        return None;
    }

    let remark = if let Some(caps) = SEA_LEVEL_PRESSURE.captures(token) {
        // tenths of hectopascal where the leading 9 or 10 is omitted
        let value = digits!(caps, 1) as f64;
        let century = if value >= 500.0 { 900.0 } else { 1000.0 };
        let hpa = century + value / 10.0;

        Remark::new(
            token,
            format!("sea level pressure {hpa:.1} hPa"),
            RemarkKind::SeaLevelPressure(Some(hpa)),
        )
    } else if token == "SLPNO" {
        Remark::new(
            token,
            "sea level pressure not available",
            RemarkKind::SeaLevelPressure(None),
        )
    } else {
        Remark::new(
            token,
            "sea level pressure (invalid format)",
            RemarkKind::SeaLevelPressure(None),
        )
    };

    Some((remark, 1))
}

fn temperature_tenths(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = TEMPERATURE_TENTHS.captures(token)?;

    let temperature = tenths(&caps[1], &caps[2]);
    let dew_point = tenths(&caps[3], &caps[4]);

    Some((
        Remark::new(
            *token,
            format!("temperature {temperature:.1}°C, dew point {dew_point:.1}°C"),
            RemarkKind::Temperature {
                temperature,
                dew_point,
            },
        ),
        1,
    ))
}

fn six_hour_max(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = SIX_HOUR_MAX.captures(token)?;
    let max = tenths(&caps[1], &caps[2]);

    Some((
        Remark::new(
            *token,
            format!("6-hour maximum temperature {max:.1}°C"),
            RemarkKind::SixHourMaximum(max),
        ),
        1,
    ))
}

fn six_hour_min(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = SIX_HOUR_MIN.captures(token)?;
    let min = tenths(&caps[1], &caps[2]);

    Some((
        Remark::new(
            *token,
            format!("6-hour minimum temperature {min:.1}°C"),
            RemarkKind::SixHourMinimum(min),
        ),
        1,
    ))
}

fn daily_temperature(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = DAILY_TEMPERATURE.captures(token)?;

    let max = tenths(&caps[1], &caps[2]);
    let min = tenths(&caps[3], &caps[4]);

    let description = format!(
        "24-hour temperature range: max {:.1}°C ({:.1}°F), min {:.1}°C ({:.1}°F)",
        max,
        fahrenheit(max),
        min,
        fahrenheit(min)
    );

    Some((
        Remark::new(*token, description, RemarkKind::DailyTemperature { max, min }),
        1,
    ))
}

fn pressure_change(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = PRESSURE_CHANGE.captures(token)?;
    let change = digits!(caps, 1) as f64 / 10.0;

    Some((
        Remark::new(
            *token,
            format!("3-hour pressure change: {change:.1} hPa"),
            RemarkKind::PressureChange(change),
        ),
        1,
    ))
}

fn pressure_tendency(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = PRESSURE_TENDENCY.captures(token)?;

    let code = digits!(caps, 1, u8);
    let change = digits!(caps, 2) as f64 / 10.0;
    let tendency = PRESSURE_TENDENCIES
        .get(code as usize)
        .copied()
        .unwrap_or("unknown");

    Some((
        Remark::new(
            *token,
            format!("pressure tendency: {tendency}, {change:.1} hPa change"),
            RemarkKind::PressureTendency { code, change },
        ),
        1,
    ))
}

fn hourly_precipitation(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = HOURLY_PRECIPITATION.captures(token)?;
    let inches = digits!(caps, 1) as f64 / 100.0;

    Some((
        Remark::new(
            *token,
            format!("precipitation of {inches:.2} inches in the last hour"),
            RemarkKind::HourlyPrecipitation(inches),
        ),
        1,
    ))
}

fn daily_precipitation(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = DAILY_PRECIPITATION.captures(token)?;
    let inches = digits!(caps, 1) as f64 / 100.0;

    Some((
        Remark::new(
            *token,
            format!("24-hour precipitation: {inches:.2} inches"),
            RemarkKind::DailyPrecipitation(inches),
        ),
        1,
    ))
}

fn snow_depth(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = SNOW_DEPTH.captures(token)?;
    let inches = digits!(caps, 1, u16);

    Some((
        Remark::new(
            *token,
            format!("snow depth: {inches} inches"),
            RemarkKind::SnowDepth(inches),
        ),
        1,
    ))
}

fn ice_accretion(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = tokens.first()?;
    let caps = ICE_ACCRETION.captures(token)?;

    let hours = match &caps[1] {
        "1" => 1,
        "2" => 3,
        _ => 6,
    };
    let amount = digits!(caps, 2) as f64 / 100.0;

    Some((
        Remark::new(
            *token,
            format!("{hours}-hour ice accretion: {amount:.2} inches"),
            RemarkKind::IceAccretion { hours, amount },
        ),
        1,
    ))
}

fn recent_weather(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = *tokens.first()?;
    let code = token.strip_prefix("RE").filter(|code| code.len() >= 2)?;

    let description = match lookup(RECENT_WEATHER, code) {
        Some(phenomenon) => format!("recent {phenomenon}"),
        None => String::from("recent weather phenomenon"),
    };

    Some((
        Remark::new(token, description, RemarkKind::RecentWeather(code.to_string())),
        1,
    ))
}

fn runway_visual_range(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = *tokens.first()?;

    if token.starts_with('R') && token.contains('/') {
        Some((
            Remark::new(
                token,
                "runway visual range information",
                RemarkKind::RunwayVisualRange,
            ),
            1,
        ))
    } else {
        None
    }
}

fn snow_increase(tokens: &[&str]) -> Option<(Remark, usize)> {
    let ["SNINCR", amount, ..] = tokens else {
        return None;
    };

    let caps = SNOW_INCREASE.captures(amount)?;

    Some((
        Remark::new(
            format!("SNINCR {amount}"),
            format!(
                "snow increasing rapidly: {} inch within {} hour",
                &caps[1], &caps[2]
            ),
            RemarkKind::SnowIncrease {
                inches: digits!(caps, 1, u16),
                hours: digits!(caps, 2, u16),
            },
        ),
        2,
    ))
}

fn ceiling(tokens: &[&str]) -> Option<(Remark, usize)> {
    let ["CIG", height, ..] = tokens else {
        return None;
    };

    if !CEILING.is_match(height) {
        return None;
    }

    let feet = height.parse::<u32>().ok()?.checked_mul(100)?;

    Some((
        Remark::new(
            format!("CIG {height}"),
            format!("variable ceiling height: {feet} feet"),
            RemarkKind::Ceiling(feet),
        ),
        2,
    ))
}

fn remark_code(tokens: &[&str]) -> Option<(Remark, usize)> {
    let token = *tokens.first()?;
    let description = lookup(REMARK_CODES, token)?;

    Some((Remark::new(token, description, RemarkKind::Code), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(s: &str) -> Vec<String> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        decode(&tokens)
            .into_iter()
            .map(|remark| remark.description)
            .collect()
    }

    #[test]
    fn sea_level_pressure_century() {
        let remarks = decode(&["SLP096", "SLP982"]);
        assert_eq!(remarks[0].description, "sea level pressure 1009.6 hPa");
        assert_eq!(remarks[1].description, "sea level pressure 998.2 hPa");

        match remarks[1].kind {
            RemarkKind::SeaLevelPressure(Some(hpa)) => assert!((hpa - 998.2).abs() < 1e-9),
            _ => panic!("should be a sea level pressure"),
        }
    }

    #[test]
    fn sea_level_pressure_not_available() {
        assert_eq!(
            descriptions("SLPNO SLP12 SLP"),
            vec![
                "sea level pressure not available",
                "sea level pressure (invalid format)",
                "sea level pressure",
            ]
        );
    }

    #[test]
    fn unknown_remark() {
        assert_eq!(
            decode(&["XYZ123"]),
            vec![Remark {
                raw: "XYZ123".to_string(),
                description: "unknown remark code".to_string(),
                kind: RemarkKind::Unknown,
            }]
        );
    }

    #[test]
    fn peak_wind_spans_three_tokens() {
        let remarks = decode(&["AO2", "PK", "WND", "28045/1955", "SLP132"]);
        assert_eq!(remarks.len(), 3);
        assert_eq!(remarks[1].raw, "PK WND 28045/1955");
        assert_eq!(remarks[1].description, "peak wind 280° at 45 knots at 19:55");

        let remarks = decode(&["PK", "WND", "31032/27"]);
        assert_eq!(
            remarks[0].kind,
            RemarkKind::PeakWind {
                direction: 310,
                speed: 32,
                hour: None,
                minute: 27
            }
        );
        assert_eq!(
            remarks[0].description,
            "peak wind 310° at 32 knots at 27 minutes past the hour"
        );
    }

    #[test]
    fn incomplete_peak_wind_is_unknown() {
        assert_eq!(
            descriptions("PK WND"),
            vec!["unknown remark code", "unknown remark code"]
        );
    }

    #[test]
    fn temperature_groups() {
        assert_eq!(
            descriptions("T01560100 10172 21044 401720044 T10221033"),
            vec![
                "temperature 15.6°C, dew point 10.0°C",
                "6-hour maximum temperature 17.2°C",
                "6-hour minimum temperature -4.4°C",
                "24-hour temperature range: max 17.2°C (63.0°F), min 4.4°C (39.9°F)",
                "temperature -2.2°C, dew point -3.3°C",
            ]
        );
    }

    #[test]
    fn pressure_and_precipitation_groups() {
        assert_eq!(
            descriptions("30012 52015 59001 P0012 70125 4/012 I1005 I3012"),
            vec![
                "3-hour pressure change: 1.2 hPa",
                "pressure tendency: increasing steadily, 1.5 hPa change",
                "pressure tendency: unknown, 0.1 hPa change",
                "precipitation of 0.12 inches in the last hour",
                "24-hour precipitation: 1.25 inches",
                "snow depth: 12 inches",
                "1-hour ice accretion: 0.05 inches",
                "6-hour ice accretion: 0.12 inches",
            ]
        );
    }

    #[test]
    fn weather_events() {
        assert_eq!(
            descriptions("RAB15 SNE42 SHRAB05 RETS REDZ"),
            vec![
                "rain began at 15 minutes past the hour",
                "snow ended at 42 minutes past the hour",
                "rain shower began at 5 minutes past the hour",
                "recent thunderstorm",
                "recent weather phenomenon",
            ]
        );
    }

    #[test]
    fn multi_token_remarks() {
        let remarks = decode(&["SNINCR", "2/10", "CIG", "005V010", "CIG", "012"]);
        assert_eq!(remarks[0].raw, "SNINCR 2/10");
        assert_eq!(
            remarks[0].description,
            "snow increasing rapidly: 2 inch within 10 hour"
        );
        // a variable ceiling range isn't a plain height
        assert_eq!(remarks[1].description, "unknown remark code");
        assert_eq!(remarks[2].description, "unknown remark code");
        assert_eq!(remarks[3].raw, "CIG 012");
        assert_eq!(remarks[3].kind, RemarkKind::Ceiling(1200));
    }

    #[test]
    fn ceiling_out_of_range() {
        let remarks = decode(&["CIG", "50000000"]);
        assert_eq!(remarks.len(), 2);
        assert!(remarks
            .iter()
            .all(|remark| remark.kind == RemarkKind::Unknown));

        // too many digits for any height
        let remarks = decode(&["CIG", "123456789012345678901"]);
        assert_eq!(remarks[0].description, "unknown remark code");
    }

    #[test]
    fn codes_and_runway_text() {
        assert_eq!(
            descriptions("AO2 $ R28L/P6000FT FROPA"),
            vec![
                "automated station with precipitation sensor",
                "weather observing equipment requires maintenance",
                "runway visual range information",
                "frontal passage",
            ]
        );
    }

    #[test]
    fn every_token_yields_a_description() {
        let tokens = ["AO2", "FOO", "PK", "WND", "SLP", "99", "/", "RE"];
        let remarks = decode(&tokens);
        let consumed: usize = remarks.iter().map(|r| r.raw.split(' ').count()).sum();

        assert_eq!(consumed, tokens.len());
        assert!(remarks.iter().all(|r| !r.description.is_empty()));
    }
}
