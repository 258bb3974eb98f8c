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
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::fields::{SiteInfo, Station};
use crate::forecast::{self, Taf};
use crate::observation::{self, Metar};
use crate::source::SiteResolver;

/// Decodes METAR and TAF reports.
///
/// Reports carry only the day of the month, thus the decoder needs to know
/// the current time to resolve the year and month. Use [`Decoder::at`] to
/// decode against a fixed time, e.g. when decoding archived reports.
///
/// The decoder holds no state that changes while decoding and can be shared
/// between threads.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use metar::Decoder;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 7, 18, 0, 0).unwrap();
/// let decoder = Decoder::at(now);
///
/// let metar = decoder.metar("KSFO 071756Z 28015G25KT 10SM FEW008 16/10 A2999");
/// assert_eq!(metar.station.ident, "KSFO");
/// assert_eq!(metar.temperature, Some(16));
/// ```
#[derive(Clone, Default)]
pub struct Decoder {
    now: Option<DateTime<Utc>>,
    resolver: Option<Arc<dyn SiteResolver + Send + Sync>>,
}

impl Decoder {
    /// Creates a decoder that resolves times relative to the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder that resolves times relative to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Some(now),
            resolver: None,
        }
    }

    /// Sets the resolver that provides the site information of stations.
    pub fn with_site_resolver(mut self, resolver: Arc<dyn SiteResolver + Send + Sync>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn metar(&self, raw: &str) -> Metar {
        let mut metar = observation::decode(raw, self.now());
        self.resolve_site(&mut metar.station);
        metar
    }

    pub fn taf(&self, raw: &str) -> Taf {
        let mut taf = forecast::decode(raw, self.now());
        self.resolve_site(&mut taf.station);
        taf
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    fn resolve_site(&self, station: &mut Station) {
        if station.ident.is_empty() {
            return;
        }

        if let Some(site) = self
            .resolver
            .as_ref()
            .and_then(|resolver| resolver.site_info(&station.ident))
        {
            station.site = site;
        } else {
            station.site = SiteInfo::unresolved(&station.ident);
        }
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("now", &self.now)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}
