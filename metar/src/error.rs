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

use std::error;
use std::fmt;

use crate::source::ReportKind;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The token doesn't have the shape of the group it was parsed as.
    UnexpectedGroup {
        group: &'static str,
        token: String,
    },
    /// A station identifier that isn't a four letter ICAO code.
    InvalidStation(String),
    /// The source has no report of that kind for the station.
    NotFound {
        kind: ReportKind,
        station: String,
    },
    /// The source failed to deliver the report.
    Fetch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedGroup { group, token } => {
                write!(f, "\"{token}\" is not a {group} group")
            }
            Self::InvalidStation(station) => {
                write!(
                    f,
                    "invalid station code \"{station}\": must be 4 characters"
                )
            }
            Self::NotFound { kind, station } => {
                write!(f, "no {kind} data found for station {station}")
            }
            Self::Fetch(reason) => write!(f, "error fetching report: {reason}"),
        }
    }
}

impl error::Error for Error {}

impl Error {
    pub(crate) fn unexpected(group: &'static str, token: &str) -> Self {
        Self::UnexpectedGroup {
            group,
            token: token.to_string(),
        }
    }
}
