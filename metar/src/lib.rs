// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! METAR and TAF decoder.
//!
//! This crate decodes aviation weather reports into structured records: the
//! aerodrome weather observation ([`Metar`]) including its remarks and the
//! terminal aerodrome forecast ([`Taf`]) with its timeline of forecast
//! periods. The groups of a report are decoded into the values found in
//! [fields].
//!
//! Decoding is best-effort and never fails. Groups that can't be decoded are
//! kept in the record, e.g. in [`Metar::unhandled`], so nothing of the report
//! gets lost.
//!
//! # Examples
//!
//! Lets decode an observation at San Francisco:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use metar::{Decoder, SpeedUnit, WindDirection};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 7, 18, 0, 0).unwrap();
//! let metar = Decoder::at(now).metar(
//!     "KSFO 071756Z 28015G25KT 10SM FEW008 BKN200 16/10 A2999 RMK AO2 SLP156",
//! );
//!
//! let wind = metar.wind.unwrap();
//! assert_eq!(wind.direction, WindDirection::Bearing(280));
//! assert_eq!(wind.gust, Some(25));
//! assert_eq!(wind.unit, SpeedUnit::Knots);
//!
//! // the remarks are decoded as well
//! assert_eq!(metar.remarks[1].description, "sea level pressure 1015.6 hPa");
//! ```
//!
//! A TAF is decoded into periods where each period knows when it's valid:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use metar::{Decoder, ForecastKind};
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 11, 6, 0, 0).unwrap();
//! let taf = Decoder::at(now).taf(
//!     "TAF KBOS 110547Z 1106/1212 14012KT 4SM -RA BR OVC008
//!      FM111800 16010KT P6SM BKN030",
//! );
//!
//! for forecast in &taf.forecasts {
//!     println!("{} {:?} - {:?}", forecast.kind, forecast.from, forecast.to);
//! }
//!
//! assert_eq!(taf.forecasts[1].kind, ForecastKind::From);
//! assert_eq!(taf.forecasts[0].to, taf.forecasts[1].from);
//! ```
//!
//! [fields]: crate::fields

#[macro_use]
mod macros;

mod decoder;
mod error;
mod forecast;
mod grammar;
mod observation;
mod time;

pub mod classifier;
pub mod fields;
pub mod remarks;
pub mod source;

pub use decoder::Decoder;
pub use error::Error;
pub use fields::*;
pub use forecast::{Forecast, ForecastKind, Taf, TafModifier};
pub use observation::{Metar, ReportType};
pub use remarks::{Remark, RemarkKind};
