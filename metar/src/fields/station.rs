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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive information of a reporting station.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteInfo {
    pub name: String,
    pub state: String,
    pub country: String,
}

impl SiteInfo {
    /// Returns the fallback site where the name is the station identifier.
    pub fn unresolved(ident: &str) -> Self {
        Self {
            name: ident.to_string(),
            ..Default::default()
        }
    }
}

/// A reporting station.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// The ICAO location indicator, e.g. `KJFK`.
    pub ident: String,
    pub site: SiteInfo,
}

impl Station {
    pub fn new(ident: &str) -> Self {
        Self {
            ident: ident.to_string(),
            site: SiteInfo::unresolved(ident),
        }
    }
}
