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

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coverage {
    SkyClear,
    Clear,
    Few,
    Scattered,
    Broken,
    Overcast,
}

impl Coverage {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SkyClear => "SKC",
            Self::Clear => "CLR",
            Self::Few => "FEW",
            Self::Scattered => "SCT",
            Self::Broken => "BKN",
            Self::Overcast => "OVC",
        }
    }

    pub fn description(&self) -> &'static str {
        lookup(CLOUD_COVERAGE, self.code()).unwrap_or_default()
    }
}

impl FromStr for Coverage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SKC" => Ok(Self::SkyClear),
            "CLR" => Ok(Self::Clear),
            "FEW" => Ok(Self::Few),
            "SCT" => Ok(Self::Scattered),
            "BKN" => Ok(Self::Broken),
            "OVC" => Ok(Self::Overcast),
            _ => Err(Error::unexpected("cloud coverage", s)),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudType {
    Cumulonimbus,
    ToweringCumulus,
}

impl CloudType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cumulonimbus => "CB",
            Self::ToweringCumulus => "TCU",
        }
    }

    pub fn description(&self) -> &'static str {
        lookup(CLOUD_TYPES, self.code()).unwrap_or_default()
    }
}

impl FromStr for CloudType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CB" => Ok(Self::Cumulonimbus),
            "TCU" => Ok(Self::ToweringCumulus),
            _ => Err(Error::unexpected("cloud type", s)),
        }
    }
}

/// A cloud layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cloud {
    pub coverage: Coverage,
    /// Height of the cloud base in feet above ground.
    pub height: Option<u32>,
    pub cloud_type: Option<CloudType>,
}

impl FromStr for Cloud {
    type Err = Error;

    /// Parses a cloud group `NNNhhh` where the height is in hundreds of feet
    /// and an optional cloud type can be appended (`BKN030CB`) or put in
    /// front of the height (`BKNCB030`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coverage, height, cloud_type) = match CLOUD.captures(s) {
            Some(caps) => (caps.get(1), caps.get(2), caps.get(3)),
            None => match CLOUD_TYPE_FIRST.captures(s) {
                Some(caps) => (caps.get(1), caps.get(3), caps.get(2)),
                None => return Err(Error::unexpected("cloud", s)),
            },
        };

        Ok(Self {
            coverage: coverage
                .ok_or_else(|| Error::unexpected("cloud", s))?
                .as_str()
                .parse()?,
            height: height.map(|h| h.as_str().parse::<u32>().unwrap_or_default() * 100),
            cloud_type: cloud_type.and_then(|t| t.as_str().parse().ok()),
        })
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coverage.code())?;

        if let Some(height) = self.height {
            write!(f, "{:03}", height / 100)?;
        }

        if let Some(cloud_type) = self.cloud_type {
            write!(f, "{}", cloud_type.code())?;
        }

        Ok(())
    }
}
