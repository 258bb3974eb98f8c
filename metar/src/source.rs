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

//! Sources of reports and station information.
//!
//! The decoder only works on report text. Where the text comes from, e.g. a
//! weather service or a file, and which sites the stations belong to is
//! provided by implementations of the traits in this module.

use std::fmt;

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::SiteInfo;
use crate::{Decoder, Error, Metar, Taf};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportKind {
    Metar,
    Taf,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metar => write!(f, "METAR"),
            Self::Taf => write!(f, "TAF"),
        }
    }
}

/// Provides the raw text of reports.
pub trait Fetcher {
    /// Returns the latest report of the kind for the station.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the source has no such report or
    /// [`Error::Fetch`] if the source can't be reached.
    fn fetch(&self, kind: ReportKind, station: &str) -> Result<String, Error>;
}

/// Provides the site information of stations.
pub trait SiteResolver {
    fn site_info(&self, station: &str) -> Option<SiteInfo>;
}

/// Normalizes a station code entered by a user.
///
/// # Errors
///
/// Returns [`Error::InvalidStation`] if the code isn't four characters long.
pub fn station_code(input: &str) -> Result<String, Error> {
    let code = input.trim().to_uppercase();

    if code.chars().count() == 4 && code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(code)
    } else {
        Err(Error::InvalidStation(input.to_string()))
    }
}

fn fetch(fetcher: &dyn Fetcher, kind: ReportKind, station: &str) -> Result<String, Error> {
    let station = station_code(station)?;

    let raw = fetcher.fetch(kind, &station).inspect_err(|e| {
        warn!("fetching {kind} of {station} failed: {e}");
    })?;

    if raw.trim().is_empty() {
        return Err(Error::NotFound { kind, station });
    }

    Ok(raw)
}

/// Fetches and decodes the latest METAR of a station.
pub fn fetch_metar(
    fetcher: &dyn Fetcher,
    decoder: &Decoder,
    station: &str,
) -> Result<Metar, Error> {
    fetch(fetcher, ReportKind::Metar, station).map(|raw| decoder.metar(raw.trim()))
}

/// Fetches and decodes the latest TAF of a station.
pub fn fetch_taf(fetcher: &dyn Fetcher, decoder: &Decoder, station: &str) -> Result<Taf, Error> {
    fetch(fetcher, ReportKind::Taf, station).map(|raw| decoder.taf(raw.trim()))
}
